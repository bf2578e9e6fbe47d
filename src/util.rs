use chrono::NaiveDate;

use crate::{
    contracts::{AllocationEngine, AllocationStore},
    domain::usecases::workflow_usecase::{AllocationWorkflow as _, AllocationWorkflowImpl},
    editors::{BaseDraft, RuleDraft},
    entities::{AllocationBase, AllocationRule, AllocationRun, BaseId, PeriodId, RuleId},
    errors::WorkflowError,
    workflow::PostOutcome,
};

/// Public entry point: wires the workflow orchestrator to the concrete
/// store/engine collaborators supplied by the embedding application.
pub struct AllocationWorkflowUtil<S, E>
where
    S: AllocationStore,
    E: AllocationEngine,
{
    workflow: AllocationWorkflowImpl<S, E>,
}

impl<S, E> AllocationWorkflowUtil<S, E>
where
    S: AllocationStore,
    E: AllocationEngine,
{
    pub fn new(store: S, engine: E) -> Self {
        Self {
            workflow: AllocationWorkflowImpl::new(store, engine),
        }
    }

    pub async fn refresh(&self) -> Result<(), WorkflowError> {
        self.workflow.refresh().await
    }

    pub async fn bases(&self) -> Vec<AllocationBase> {
        self.workflow.bases().await
    }

    pub async fn rules(&self) -> Vec<AllocationRule> {
        self.workflow.rules().await
    }

    pub async fn create_base(&self, draft: &BaseDraft) -> Result<AllocationBase, WorkflowError> {
        self.workflow.create_base(draft).await
    }

    pub async fn update_base(
        &self,
        id: &BaseId,
        draft: &BaseDraft,
    ) -> Result<AllocationBase, WorkflowError> {
        self.workflow.update_base(id, draft).await
    }

    pub async fn archive_base(&self, id: &BaseId) -> Result<AllocationBase, WorkflowError> {
        self.workflow.archive_base(id).await
    }

    pub async fn activate_base(&self, id: &BaseId) -> Result<AllocationBase, WorkflowError> {
        self.workflow.activate_base(id).await
    }

    pub async fn create_rule(&self, draft: &RuleDraft) -> Result<AllocationRule, WorkflowError> {
        self.workflow.create_rule(draft).await
    }

    pub async fn update_rule(
        &self,
        id: &RuleId,
        draft: &RuleDraft,
    ) -> Result<AllocationRule, WorkflowError> {
        self.workflow.update_rule(id, draft).await
    }

    pub async fn archive_rule(&self, id: &RuleId) -> Result<AllocationRule, WorkflowError> {
        self.workflow.archive_rule(id).await
    }

    pub async fn activate_rule(&self, id: &RuleId) -> Result<AllocationRule, WorkflowError> {
        self.workflow.activate_rule(id).await
    }

    pub async fn delete_rule(&self, id: &RuleId) -> Result<(), WorkflowError> {
        self.workflow.delete_rule(id).await
    }

    pub async fn preview(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
    ) -> Result<Vec<AllocationRun>, WorkflowError> {
        self.workflow.preview(period_id, rule_ids).await
    }

    pub async fn compute(
        &self,
        period_id: &PeriodId,
        rule_ids: &[RuleId],
        memo: &str,
        replace: bool,
    ) -> Result<Vec<AllocationRun>, WorkflowError> {
        self.workflow.compute(period_id, rule_ids, memo, replace).await
    }

    pub async fn post(
        &self,
        run: &AllocationRun,
        entry_date: NaiveDate,
        memo: &str,
    ) -> Result<PostOutcome, WorkflowError> {
        self.workflow.post(run, entry_date, memo).await
    }
}
