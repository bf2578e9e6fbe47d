use uuid::Uuid;

/// Idempotency token attached to every state-changing request.
///
/// Minted by the caller immediately before dispatch and never stored on an
/// entity: one logical user action uses exactly one token, so only the
/// transport's automatic redelivery of the same attempt can repeat it. The
/// remote contract guarantees that repeated delivery of one token yields the
/// original effect exactly once.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
#[serde(transparent)]
pub struct MutationToken(Uuid);

impl MutationToken {
    pub fn mint() -> Self {
        MutationToken(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for MutationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
