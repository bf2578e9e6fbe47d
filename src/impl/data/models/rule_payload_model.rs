use std::collections::BTreeMap;

use crate::entities::{
    AccountId, AllocationRule, AllocationTarget, BaseId, DimensionCategory, RecordStatus,
};

/// One target row as serialized inside a rule payload. Carried verbatim from
/// the draft, free-form dimension keys included.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPayloadModel {
    pub to_account_id: AccountId,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub dimension_values: BTreeMap<String, String>,
}

impl From<&AllocationTarget> for TargetPayloadModel {
    fn from(target: &AllocationTarget) -> Self {
        TargetPayloadModel {
            to_account_id: target.to_account_id.clone(),
            weight: target.weight,
            notes: target.notes.clone(),
            dimension_values: target.dimension_values.clone(),
        }
    }
}

/// Wire-format body for rule create/update calls. Field names and nesting
/// match the remote contract exactly.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePayloadModel {
    pub code: String,
    pub name: String,
    pub base_id: BaseId,
    pub source_account_id: AccountId,
    pub dimension_category: DimensionCategory,
    pub status: RecordStatus,
    pub targets: Vec<TargetPayloadModel>,
}

impl RulePayloadModel {
    /// Full-replace body for a status-only transition (archive/activate):
    /// the cached record verbatim with only `status` swapped.
    pub(crate) fn from_record_with_status(
        record: &AllocationRule,
        status: RecordStatus,
    ) -> Self {
        RulePayloadModel {
            code: record.code.clone(),
            name: record.name.clone(),
            base_id: record.base_id.clone(),
            source_account_id: record.source_account_id.clone(),
            dimension_category: record.dimension_category,
            status,
            targets: record.targets.iter().map(TargetPayloadModel::from).collect(),
        }
    }
}
