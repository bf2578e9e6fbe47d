use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::{
    data::models::{base_payload_model::BasePayloadModel, rule_payload_model::RulePayloadModel},
    domain::{
        logic::{base_editor::BaseDraft, rule_editor::RuleDraft},
        repositories::{
            allocation_engine::AllocationEngine, allocation_store::AllocationStore,
        },
    },
    entities::{
        AllocationBase, AllocationRule, AllocationRun, BaseId, JournalEntryId, MutationToken,
        PeriodId, RecordStatus, RuleId, RunStatus,
    },
    errors::WorkflowError,
};

/// Result of posting a computed run.
///
/// A missing journal entry id is the "posted with zero amount" outcome,
/// which the engine contract defines as a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOutcome {
    pub journal_entry_id: Option<JournalEntryId>,
}

impl PostOutcome {
    pub fn is_zero_amount(&self) -> bool {
        self.journal_entry_id.is_none()
    }
}

/// Sequences the define → preview → compute → post workflow against the
/// external store and engine.
///
/// Record lifecycle (identical for bases and rules): Create lands in Active;
/// Archive is allowed from Active only and always lands in Archived;
/// Activate is allowed from Inactive only; Edit is allowed from Active and
/// Inactive; Delete (rules only) is allowed from Archived only. Guard
/// violations are rejected before any network call.
///
/// Every mutating call mints one fresh [`MutationToken`] immediately before
/// dispatch; a failed attempt discards it and the next user-initiated retry
/// mints a new one.
#[async_trait]
pub trait AllocationWorkflow: Send + Sync {
    /// Re-fetches the base and rule listings from the store.
    async fn refresh(&self) -> Result<(), WorkflowError>;

    /// Cached base listing (empty until the first refresh).
    async fn bases(&self) -> Vec<AllocationBase>;

    /// Cached rule listing (empty until the first refresh).
    async fn rules(&self) -> Vec<AllocationRule>;

    async fn create_base(&self, draft: &BaseDraft) -> Result<AllocationBase, WorkflowError>;

    async fn update_base(
        &self,
        id: &BaseId,
        draft: &BaseDraft,
    ) -> Result<AllocationBase, WorkflowError>;

    async fn archive_base(&self, id: &BaseId) -> Result<AllocationBase, WorkflowError>;

    async fn activate_base(&self, id: &BaseId) -> Result<AllocationBase, WorkflowError>;

    async fn create_rule(&self, draft: &RuleDraft) -> Result<AllocationRule, WorkflowError>;

    async fn update_rule(
        &self,
        id: &RuleId,
        draft: &RuleDraft,
    ) -> Result<AllocationRule, WorkflowError>;

    async fn archive_rule(&self, id: &RuleId) -> Result<AllocationRule, WorkflowError>;

    async fn activate_rule(&self, id: &RuleId) -> Result<AllocationRule, WorkflowError>;

    async fn delete_rule(&self, id: &RuleId) -> Result<(), WorkflowError>;

    /// Side-effect-free on the ledger; safe to repeat.
    async fn preview(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
    ) -> Result<Vec<AllocationRun>, WorkflowError>;

    /// Resolves `rule_ids` against the cached rules filtered to Active
    /// status and forwards only the resolved ids; fails locally when none
    /// resolve. `replace = true` is required for repeated computes of the
    /// same period to converge.
    async fn compute(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
        memo: &str,
        replace: bool,
    ) -> Result<Vec<AllocationRun>, WorkflowError>;

    /// One-way Computed → Posted transition. The run must be in Computed
    /// status; posting anything else is a programming error.
    async fn post(
        &self,
        run: &AllocationRun,
        entry_date: NaiveDate,
        memo: &str,
    ) -> Result<PostOutcome, WorkflowError>;
}

pub(crate) struct AllocationWorkflowImpl<S, E>
where
    S: AllocationStore,
    E: AllocationEngine,
{
    store: S,
    engine: E,
    // One interactive writer per session; the locks only serialize cache
    // refreshes against reads, not concurrent editors.
    bases: RwLock<Vec<AllocationBase>>,
    rules: RwLock<Vec<AllocationRule>>,
}

impl<S, E> AllocationWorkflowImpl<S, E>
where
    S: AllocationStore,
    E: AllocationEngine,
{
    pub(crate) fn new(store: S, engine: E) -> Self {
        AllocationWorkflowImpl {
            store,
            engine,
            bases: RwLock::new(Vec::new()),
            rules: RwLock::new(Vec::new()),
        }
    }

    async fn refresh_caches(&self) -> Result<(), WorkflowError> {
        let (bases, rules) =
            futures::try_join!(self.store.list_bases(), self.store.list_rules())?;
        *self.bases.write().await = bases;
        *self.rules.write().await = rules;
        Ok(())
    }

    /// Invalidate-and-refetch after a successful mutation. The mutation has
    /// already landed, so a failed re-fetch only leaves the cache cold; it
    /// is logged rather than turned into a failure of the user's action.
    async fn reload_after_mutation(&self) {
        self.bases.write().await.clear();
        self.rules.write().await.clear();
        if let Err(err) = self.refresh_caches().await {
            warn!(error = %err, "cache reload after mutation failed");
        }
    }

    async fn cached_base(&self, id: &BaseId) -> Result<AllocationBase, WorkflowError> {
        self.bases
            .read()
            .await
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| WorkflowError::UnknownRecord {
                kind: "allocation base",
                id: id.to_string(),
            })
    }

    async fn cached_rule(&self, id: &RuleId) -> Result<AllocationRule, WorkflowError> {
        self.rules
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| WorkflowError::UnknownRecord {
                kind: "allocation rule",
                id: id.to_string(),
            })
    }
}

fn ensure_status(
    action: &'static str,
    status: RecordStatus,
    allowed: &[RecordStatus],
) -> Result<(), WorkflowError> {
    if allowed.contains(&status) {
        Ok(())
    } else {
        Err(WorkflowError::InvalidTransition { action, status })
    }
}

const EDITABLE: &[RecordStatus] = &[RecordStatus::Active, RecordStatus::Inactive];

#[async_trait]
impl<S, E> AllocationWorkflow for AllocationWorkflowImpl<S, E>
where
    S: AllocationStore,
    E: AllocationEngine,
{
    async fn refresh(&self) -> Result<(), WorkflowError> {
        self.refresh_caches().await
    }

    async fn bases(&self) -> Vec<AllocationBase> {
        self.bases.read().await.clone()
    }

    async fn rules(&self) -> Vec<AllocationRule> {
        self.rules.read().await.clone()
    }

    async fn create_base(&self, draft: &BaseDraft) -> Result<AllocationBase, WorkflowError> {
        draft.validate()?;
        let payload = draft.to_payload();
        let token = MutationToken::mint();
        debug!(%token, code = %payload.code, "creating allocation base");
        let record = self.store.create_base(payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn update_base(
        &self,
        id: &BaseId,
        draft: &BaseDraft,
    ) -> Result<AllocationBase, WorkflowError> {
        let current = self.cached_base(id).await?;
        ensure_status("edit", current.status, EDITABLE)?;
        draft.validate()?;
        let payload = draft.to_payload();
        let token = MutationToken::mint();
        debug!(%token, %id, "updating allocation base");
        let record = self.store.update_base(id, payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn archive_base(&self, id: &BaseId) -> Result<AllocationBase, WorkflowError> {
        let current = self.cached_base(id).await?;
        ensure_status("archive", current.status, &[RecordStatus::Active])?;
        let payload =
            BasePayloadModel::from_record_with_status(&current, RecordStatus::Archived);
        let token = MutationToken::mint();
        debug!(%token, %id, "archiving allocation base");
        let record = self.store.update_base(id, payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn activate_base(&self, id: &BaseId) -> Result<AllocationBase, WorkflowError> {
        let current = self.cached_base(id).await?;
        ensure_status("activate", current.status, &[RecordStatus::Inactive])?;
        let payload = BasePayloadModel::from_record_with_status(&current, RecordStatus::Active);
        let token = MutationToken::mint();
        debug!(%token, %id, "activating allocation base");
        let record = self.store.update_base(id, payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn create_rule(&self, draft: &RuleDraft) -> Result<AllocationRule, WorkflowError> {
        draft.validate()?;
        let payload = draft.to_payload();
        let token = MutationToken::mint();
        debug!(%token, code = %payload.code, "creating allocation rule");
        let record = self.store.create_rule(payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn update_rule(
        &self,
        id: &RuleId,
        draft: &RuleDraft,
    ) -> Result<AllocationRule, WorkflowError> {
        let current = self.cached_rule(id).await?;
        ensure_status("edit", current.status, EDITABLE)?;
        draft.validate()?;
        let payload = draft.to_payload();
        let token = MutationToken::mint();
        debug!(%token, %id, "updating allocation rule");
        let record = self.store.update_rule(id, payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn archive_rule(&self, id: &RuleId) -> Result<AllocationRule, WorkflowError> {
        let current = self.cached_rule(id).await?;
        ensure_status("archive", current.status, &[RecordStatus::Active])?;
        let payload =
            RulePayloadModel::from_record_with_status(&current, RecordStatus::Archived);
        let token = MutationToken::mint();
        debug!(%token, %id, "archiving allocation rule");
        let record = self.store.update_rule(id, payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn activate_rule(&self, id: &RuleId) -> Result<AllocationRule, WorkflowError> {
        let current = self.cached_rule(id).await?;
        ensure_status("activate", current.status, &[RecordStatus::Inactive])?;
        let payload = RulePayloadModel::from_record_with_status(&current, RecordStatus::Active);
        let token = MutationToken::mint();
        debug!(%token, %id, "activating allocation rule");
        let record = self.store.update_rule(id, payload, token).await?;
        self.reload_after_mutation().await;
        Ok(record)
    }

    async fn delete_rule(&self, id: &RuleId) -> Result<(), WorkflowError> {
        let current = self.cached_rule(id).await?;
        ensure_status("delete", current.status, &[RecordStatus::Archived])?;
        let token = MutationToken::mint();
        info!(%token, %id, "deleting archived allocation rule");
        self.store.delete_rule(id, token).await?;
        self.reload_after_mutation().await;
        Ok(())
    }

    async fn preview(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
    ) -> Result<Vec<AllocationRun>, WorkflowError> {
        debug!(period = %period_id, rules = rule_ids.len(), "previewing allocations");
        Ok(self.engine.preview(period_id, rule_ids).await?)
    }

    async fn compute(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
        memo: &str,
        replace: bool,
    ) -> Result<Vec<AllocationRun>, WorkflowError> {
        let resolved: Vec<RuleId> = {
            let rules = self.rules.read().await;
            rule_ids
                .iter()
                .filter(|id| {
                    rules
                        .iter()
                        .any(|r| &r.id == *id && r.status == RecordStatus::Active)
                })
                .cloned()
                .collect()
        };
        if resolved.is_empty() {
            return Err(WorkflowError::NoActiveRules);
        }
        let token = MutationToken::mint();
        info!(
            %token,
            period = %period_id,
            rules = resolved.len(),
            replace,
            "computing allocations"
        );
        Ok(self
            .engine
            .compute(period_id, &resolved, memo, replace, token)
            .await?)
    }

    async fn post(
        &self,
        run: &AllocationRun,
        entry_date: NaiveDate,
        memo: &str,
    ) -> Result<PostOutcome, WorkflowError> {
        // Callers only reach posting through a computed run returned by the
        // engine; anything else is a programming error.
        assert_eq!(
            run.status,
            RunStatus::Computed,
            "only a computed run can be posted"
        );
        let token = MutationToken::mint();
        info!(%token, run = %run.id, %entry_date, "posting allocation run");
        let journal_entry_id = self.engine.post(&run.id, entry_date, memo, token).await?;
        if journal_entry_id.is_none() {
            info!(run = %run.id, "posted with zero amount; no journal entry created");
        }
        Ok(PostOutcome { journal_entry_id })
    }
}
