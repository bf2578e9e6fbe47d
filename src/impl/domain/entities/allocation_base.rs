use super::{ids::BaseId, status::RecordStatus};

/// Unit of measure an allocation rule's weights are expressed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum BaseUnit {
    Hours,
    Headcount,
    SquareFootage,
    Revenue,
    Units,
    Percentage,
    Custom,
}

/// Canonical allocation-base record as returned by the remote store.
///
/// Mutated only via full-replace update; never hard-deleted (archived
/// instead). `code` is stored uppercase; uniqueness is enforced by the
/// remote store and the client only normalizes case before submission.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBase {
    pub id: BaseId,
    pub code: String,
    pub name: String,
    pub status: RecordStatus,
    pub unit: BaseUnit,
}
