use async_trait::async_trait;

use crate::{
    data::models::{base_payload_model::BasePayloadModel, rule_payload_model::RulePayloadModel},
    entities::{AllocationBase, AllocationRule, BaseId, MutationToken, RuleId},
    errors::RemoteError,
};

/// Contract of the remote store holding base and rule records. Implemented
/// by the embedding application's HTTP collaborator; this crate only
/// orchestrates calls against it.
///
/// Every mutating call carries a [`MutationToken`] in a dedicated
/// idempotency field; the remote contract guarantees that repeated delivery
/// of the same token yields the original effect exactly once.
#[async_trait]
pub trait AllocationStore: Send + Sync {
    async fn list_bases(&self) -> Result<Vec<AllocationBase>, RemoteError>;

    async fn create_base(
        &self,
        payload: BasePayloadModel,
        token: MutationToken,
    ) -> Result<AllocationBase, RemoteError>;

    /// Full-replace update.
    async fn update_base(
        &self,
        id: &BaseId,
        payload: BasePayloadModel,
        token: MutationToken,
    ) -> Result<AllocationBase, RemoteError>;

    async fn list_rules(&self) -> Result<Vec<AllocationRule>, RemoteError>;

    async fn create_rule(
        &self,
        payload: RulePayloadModel,
        token: MutationToken,
    ) -> Result<AllocationRule, RemoteError>;

    /// Full-replace update.
    async fn update_rule(
        &self,
        id: &RuleId,
        payload: RulePayloadModel,
        token: MutationToken,
    ) -> Result<AllocationRule, RemoteError>;

    /// Hard removal. Only ever issued for archived rules; bases are never
    /// hard-deleted.
    async fn delete_rule(&self, id: &RuleId, token: MutationToken) -> Result<(), RemoteError>;
}
