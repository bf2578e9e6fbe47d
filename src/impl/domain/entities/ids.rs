// Opaque identifiers minted by the remote store/engine. The client treats
// them as stable handles and never derives meaning from their contents.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde_derive::Serialize,
            serde_derive::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub(crate) String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// An allocation base record in the remote store.
    BaseId
);
define_id!(
    /// An allocation rule record in the remote store.
    RuleId
);
define_id!(
    /// A chart-of-accounts entry (master data, consumed read-only).
    AccountId
);
define_id!(
    /// An organizational unit (cost center, profit center, project, ...).
    OrgUnitId
);
define_id!(
    /// An accounting period (master data, consumed read-only).
    PeriodId
);
define_id!(
    /// One computed application of a rule for a period.
    AllocationRunId
);
define_id!(
    /// A ledger journal entry produced by posting a run.
    JournalEntryId
);
