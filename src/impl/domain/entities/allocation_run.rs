use super::ids::{AllocationRunId, JournalEntryId, PeriodId, RuleId};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RunStatus {
    Computed,
    Posted,
}

/// One computed application of a rule for a period, as returned by the
/// external engine. The client never constructs runs itself: Compute returns
/// them and Post references them by id.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRun {
    pub id: AllocationRunId,
    pub rule_id: RuleId,
    pub period_id: PeriodId,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_entry_id: Option<JournalEntryId>,
    /// True when the engine reused an existing computed run instead of
    /// producing a fresh one.
    #[serde(default)]
    pub reused: bool,
}
