use crate::{
    data::models::base_payload_model::BasePayloadModel,
    entities::{AllocationBase, BaseId, BaseUnit, RecordStatus},
};

use super::validation::{check_min_len, ValidationErrors};

/// In-memory draft of an allocation base being created or edited.
///
/// Held as a plain value and threaded through the editor; validation and
/// payload construction are pure.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDraft {
    /// None until the remote store has assigned an id.
    pub id: Option<BaseId>,
    pub code: String,
    pub name: String,
    pub status: RecordStatus,
    /// None while the user has not picked a unit yet; validation requires a
    /// selection before submission.
    pub unit: Option<BaseUnit>,
}

impl BaseDraft {
    pub fn new() -> Self {
        BaseDraft {
            id: None,
            code: String::new(),
            name: String::new(),
            status: RecordStatus::Active,
            unit: None,
        }
    }

    pub fn from_existing(record: &AllocationBase) -> Self {
        BaseDraft {
            id: Some(record.id.clone()),
            code: record.code.clone(),
            name: record.name.clone(),
            status: record.status,
            unit: Some(record.unit),
        }
    }

    /// Gate before submission. Never touches the network and never panics
    /// for expected failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_min_len(&mut errors, "code", &self.code, 2);
        check_min_len(&mut errors, "name", &self.name, 2);
        if self.unit.is_none() {
            errors.push("unit", "is required");
        }
        errors.into_result()
    }

    /// Wire-format body: code uppercased, name trimmed. Callers validate
    /// first; an unselected unit past the gate is a programming error.
    pub fn to_payload(&self) -> BasePayloadModel {
        BasePayloadModel {
            code: self.code.trim().to_uppercase(),
            name: self.name.trim().to_string(),
            status: self.status,
            unit: self
                .unit
                .expect("unit is always selected on a validated draft"),
        }
    }
}

impl Default for BaseDraft {
    fn default() -> Self {
        Self::new()
    }
}
