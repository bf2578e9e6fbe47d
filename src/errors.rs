use thiserror::Error;

use crate::{editors::ValidationErrors, entities::RecordStatus};

pub(crate) const GENERIC_REJECTION: &str = "the allocation service rejected the request";

/// Failure modes surfaced by the remote store/engine collaborators.
///
/// Transport-level retry/backoff lives with the HTTP collaborator, not here;
/// at this layer a transport failure and a remote rejection are handled
/// identically (draft preserved, user re-invokes with a fresh token).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The remote service rejected the request (constraint violation, stale
    /// reference, duplicate code). Carries the message extracted from the
    /// response body when the body was structured.
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_REJECTION))]
    Rejected(Option<String>),
    /// The request never produced a usable response (timeout, connectivity).
    #[error("allocation service unreachable: {0}")]
    Transport(String),
}

/// Errors surfaced by the allocation workflow.
///
/// Local validation failures never reach the network. Remote and transport
/// failures leave the submitted draft unmodified so the user can correct and
/// resubmit; the retry mints a new token. Precondition violations (editing a
/// target out of range, posting a never-computed run) are assertions, not
/// variants here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    /// The id does not resolve against the cached records; the caller is
    /// acting on a stale listing.
    #[error("no {kind} found with id '{id}'")]
    UnknownRecord { kind: &'static str, id: String },
    #[error("cannot {action} a record in status '{status}'")]
    InvalidTransition {
        action: &'static str,
        status: RecordStatus,
    },
    #[error("no active rules to compute")]
    NoActiveRules,
}

impl From<ValidationErrors> for WorkflowError {
    fn from(errors: ValidationErrors) -> Self {
        WorkflowError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_without_a_structured_body_falls_back_to_a_generic_message() {
        assert_eq!(RemoteError::Rejected(None).to_string(), GENERIC_REJECTION);
        assert_eq!(
            RemoteError::Rejected(Some("code 'LH' already exists".to_string())).to_string(),
            "code 'LH' already exists"
        );
    }
}
