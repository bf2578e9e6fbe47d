/// Lifecycle status shared by allocation bases and rules.
///
/// `Active` and `Inactive` records remain editable; `Archived` is the soft
/// end state (records are never hard-deleted except for rules, and only from
/// `Archived`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RecordStatus {
    Active,
    Inactive,
    Archived,
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Active => write!(f, "active"),
            RecordStatus::Inactive => write!(f, "inactive"),
            RecordStatus::Archived => write!(f, "archived"),
        }
    }
}
