use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    entities::{AllocationRun, AllocationRunId, JournalEntryId, MutationToken, PeriodId, RuleId},
    errors::RemoteError,
};

/// Contract of the external engine that performs the weighted computation
/// and produces ledger journal entries. This crate never re-implements the
/// allocation math; only the call shapes matter here.
#[async_trait]
pub trait AllocationEngine: Send + Sync {
    /// Side-effect-free on the ledger; always safe to repeat.
    async fn preview(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
    ) -> Result<Vec<AllocationRun>, RemoteError>;

    /// Not idempotent by default: with `replace = false`, repeated calls
    /// append additional computed runs for the same period/rule pair.
    /// `replace = true` gives delete-then-recreate semantics, making
    /// repeated calls convergent.
    async fn compute(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
        memo: &str,
        replace: bool,
        token: MutationToken,
    ) -> Result<Vec<AllocationRun>, RemoteError>;

    /// One-way transition from Computed to Posted. A `None` journal entry id
    /// on success means the run posted with zero amount; reversal is a
    /// separate manual action outside this system.
    async fn post(
        &self,
        run_id: &AllocationRunId,
        entry_date: NaiveDate,
        memo: &str,
        token: MutationToken,
    ) -> Result<Option<JournalEntryId>, RemoteError>;
}
