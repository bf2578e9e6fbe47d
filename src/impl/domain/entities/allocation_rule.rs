use std::collections::BTreeMap;

use super::{
    dimension::DimensionCategory,
    ids::{AccountId, BaseId, RuleId},
    status::RecordStatus,
};

/// One weighted destination of an allocation rule.
///
/// Targets are embedded in their owning rule and never addressed
/// independently. `dimension_values` always carries the storage key of the
/// rule's configured category, mapped to a concrete organizational-unit id;
/// free-form extra dimension keys may sit alongside it and are preserved
/// verbatim.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTarget {
    pub to_account_id: AccountId,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub dimension_values: BTreeMap<String, String>,
}

impl AllocationTarget {
    /// Organizational-unit id recorded under the given category's storage
    /// key, if any.
    pub fn dimension_value(&self, category: DimensionCategory) -> Option<&str> {
        self.dimension_values
            .get(category.storage_key())
            .map(String::as_str)
    }
}

/// Canonical allocation-rule record as returned by the remote store: a named
/// mapping from one source account to a weighted list of targets,
/// parameterized by a base and a dimension category.
///
/// Target order is preserved for display but carries no semantic weight.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRule {
    pub id: RuleId,
    pub code: String,
    pub name: String,
    pub base_id: BaseId,
    pub source_account_id: AccountId,
    pub dimension_category: DimensionCategory,
    pub status: RecordStatus,
    pub targets: Vec<AllocationTarget>,
}
