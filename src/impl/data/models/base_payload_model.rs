use crate::entities::{AllocationBase, BaseUnit, RecordStatus};

/// Wire-format body for base create/update calls. Field names and nesting
/// match the remote contract exactly; the backend consumes this unmodified.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePayloadModel {
    pub code: String,
    pub name: String,
    pub status: RecordStatus,
    pub unit: BaseUnit,
}

impl BasePayloadModel {
    /// Full-replace body for a status-only transition (archive/activate):
    /// the cached record verbatim with only `status` swapped.
    pub(crate) fn from_record_with_status(
        record: &AllocationBase,
        status: RecordStatus,
    ) -> Self {
        BasePayloadModel {
            code: record.code.clone(),
            name: record.name.clone(),
            status,
            unit: record.unit,
        }
    }
}
