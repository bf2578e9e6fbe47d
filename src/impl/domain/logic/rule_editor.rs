use std::collections::BTreeMap;

use crate::{
    data::models::rule_payload_model::{RulePayloadModel, TargetPayloadModel},
    entities::{
        AccountId, AllocationRule, AllocationTarget, BaseId, DimensionCategory, RecordStatus,
        RuleId,
    },
};

use super::validation::{check_min_len, ValidationErrors};

/// Input for adding or replacing one target row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetInput {
    pub to_account_id: String,
    pub weight: f64,
    /// Organizational unit stored under the rule's current storage key.
    pub org_unit_id: String,
    pub notes: Option<String>,
    /// Free-form extra dimension keys, kept alongside the category key.
    pub extra_dimensions: BTreeMap<String, String>,
}

/// In-memory draft of an allocation rule being created or edited.
///
/// An immutable value: every editor operation borrows the draft and returns
/// an updated copy, so a failed operation provably leaves the original
/// untouched and validation stays trivially testable.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDraft {
    /// None until the remote store has assigned an id.
    pub id: Option<RuleId>,
    pub code: String,
    pub name: String,
    pub base_id: Option<BaseId>,
    pub source_account_id: Option<AccountId>,
    pub dimension_category: DimensionCategory,
    pub status: RecordStatus,
    pub targets: Vec<AllocationTarget>,
}

impl RuleDraft {
    pub fn new() -> Self {
        RuleDraft {
            id: None,
            code: String::new(),
            name: String::new(),
            base_id: None,
            source_account_id: None,
            // Cost center is by far the most common category.
            dimension_category: DimensionCategory::CostCenter,
            status: RecordStatus::Active,
            targets: Vec::new(),
        }
    }

    pub fn from_existing(record: &AllocationRule) -> Self {
        RuleDraft {
            id: Some(record.id.clone()),
            code: record.code.clone(),
            name: record.name.clone(),
            base_id: Some(record.base_id.clone()),
            source_account_id: Some(record.source_account_id.clone()),
            dimension_category: record.dimension_category,
            status: record.status,
            targets: record.targets.clone(),
        }
    }

    /// Storage key of the currently configured dimension category.
    pub fn storage_key(&self) -> &'static str {
        self.dimension_category.storage_key()
    }

    /// Switches the dimension category.
    ///
    /// Targets added under the previous category keep their old storage key
    /// until individually edited; only the key for newly added or replaced
    /// targets changes.
    pub fn with_dimension_category(&self, category: DimensionCategory) -> RuleDraft {
        RuleDraft {
            dimension_category: category,
            ..self.clone()
        }
    }

    /// Appends a target. Requires a destination account, a positive weight
    /// and an organizational unit; on failure the draft is not modified.
    pub fn with_target(&self, input: &TargetInput) -> Result<RuleDraft, ValidationErrors> {
        let target = self.build_target(input)?;
        let mut next = self.clone();
        next.targets.push(target);
        Ok(next)
    }

    /// Replaces the target at `index` in place.
    ///
    /// `index` must be in bounds: callers only reach this path through
    /// controlled editor state, so an out-of-range index is a programming
    /// error, not a recoverable condition.
    pub fn with_target_replaced(
        &self,
        index: usize,
        input: &TargetInput,
    ) -> Result<RuleDraft, ValidationErrors> {
        assert!(
            index < self.targets.len(),
            "target index {index} out of bounds (len {})",
            self.targets.len()
        );
        let target = self.build_target(input)?;
        let mut next = self.clone();
        next.targets[index] = target;
        Ok(next)
    }

    /// Removes the target at `index`. The empty-list constraint is enforced
    /// at submit time by `validate`, not while editing.
    pub fn without_target(&self, index: usize) -> RuleDraft {
        assert!(
            index < self.targets.len(),
            "target index {index} out of bounds (len {})",
            self.targets.len()
        );
        let mut next = self.clone();
        next.targets.remove(index);
        next
    }

    fn build_target(&self, input: &TargetInput) -> Result<AllocationTarget, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if input.to_account_id.trim().is_empty() {
            errors.push("toAccountId", "is required");
        }
        if !(input.weight > 0.0) {
            errors.push("weight", "must be greater than zero");
        }
        if input.org_unit_id.trim().is_empty() {
            errors.push("orgUnitId", "is required");
        }
        errors.into_result()?;

        let mut dimension_values = input.extra_dimensions.clone();
        // Inserted last so the explicit selection wins over a colliding
        // free-form key.
        dimension_values.insert(
            self.storage_key().to_string(),
            input.org_unit_id.trim().to_string(),
        );
        Ok(AllocationTarget {
            to_account_id: AccountId::new(input.to_account_id.trim()),
            weight: input.weight,
            notes: input.notes.clone(),
            dimension_values,
        })
    }

    /// Gate before submission.
    ///
    /// Target checks fail fast at the first offending target and report only
    /// that one, keyed by its position (`targets[1].weight`).
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_min_len(&mut errors, "code", &self.code, 2);
        check_min_len(&mut errors, "name", &self.name, 2);
        if self.base_id.is_none() {
            errors.push("baseId", "is required");
        }
        if self.source_account_id.is_none() {
            errors.push("sourceAccountId", "is required");
        }
        if self.targets.is_empty() {
            errors.push("targets", "at least one target is required");
        } else {
            let key = self.storage_key();
            for (index, target) in self.targets.iter().enumerate() {
                let mut target_errors = ValidationErrors::new();
                if target.to_account_id.as_str().trim().is_empty() {
                    target_errors.push(format!("targets[{index}].toAccountId"), "is required");
                }
                if !(target.weight > 0.0) {
                    target_errors
                        .push(format!("targets[{index}].weight"), "must be greater than zero");
                }
                let unit = target.dimension_values.get(key).map(String::as_str);
                if unit.map_or(true, |v| v.trim().is_empty()) {
                    target_errors.push(
                        format!("targets[{index}].dimensionValues"),
                        format!("missing '{key}' assignment"),
                    );
                }
                if !target_errors.is_empty() {
                    errors.merge(target_errors);
                    break;
                }
            }
        }
        errors.into_result()
    }

    /// Wire-format body: code uppercased, name trimmed, targets serialized
    /// verbatim (extra dimension keys included). Callers validate first; a
    /// missing base or source account past the gate is a programming error.
    pub fn to_payload(&self) -> RulePayloadModel {
        RulePayloadModel {
            code: self.code.trim().to_uppercase(),
            name: self.name.trim().to_string(),
            base_id: self
                .base_id
                .clone()
                .expect("base is always selected on a validated draft"),
            source_account_id: self
                .source_account_id
                .clone()
                .expect("source account is always selected on a validated draft"),
            dimension_category: self.dimension_category,
            status: self.status,
            targets: self.targets.iter().map(TargetPayloadModel::from).collect(),
        }
    }
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self::new()
    }
}
