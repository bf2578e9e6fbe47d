/// Organizational dimension a rule's targets are tagged with.
///
/// The category alone decides which field inside a target's
/// `dimensionValues` map records the selected organizational unit. Deriving
/// that key here, rather than recomputing it at each call site, keeps the
/// category selector and the stored map key from drifting apart.
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
pub enum DimensionCategory {
    CostCenter,
    ProfitCenter,
    InvestmentCenter,
    Project,
    Custom,
}

/// Static registry entry for one dimension category.
#[derive(Debug, PartialEq, Eq)]
pub struct DimensionSpec {
    pub category: DimensionCategory,
    /// Field name under which a target stores its organizational-unit id.
    /// Stable for the process lifetime: renaming a key would orphan
    /// previously stored targets.
    pub storage_key: &'static str,
    pub label: &'static str,
}

static COST_CENTER: DimensionSpec = DimensionSpec {
    category: DimensionCategory::CostCenter,
    storage_key: "costCenterId",
    label: "Cost Center",
};
static PROFIT_CENTER: DimensionSpec = DimensionSpec {
    category: DimensionCategory::ProfitCenter,
    storage_key: "profitCenterId",
    label: "Profit Center",
};
static INVESTMENT_CENTER: DimensionSpec = DimensionSpec {
    category: DimensionCategory::InvestmentCenter,
    storage_key: "investmentCenterId",
    label: "Investment Center",
};
static PROJECT: DimensionSpec = DimensionSpec {
    category: DimensionCategory::Project,
    storage_key: "projectId",
    label: "Project",
};
static CUSTOM: DimensionSpec = DimensionSpec {
    category: DimensionCategory::Custom,
    storage_key: "customId",
    label: "Custom",
};

impl DimensionCategory {
    /// Registry lookup. Total over the closed enum, so there is no error
    /// path.
    pub fn spec(&self) -> &'static DimensionSpec {
        match self {
            DimensionCategory::CostCenter => &COST_CENTER,
            DimensionCategory::ProfitCenter => &PROFIT_CENTER,
            DimensionCategory::InvestmentCenter => &INVESTMENT_CENTER,
            DimensionCategory::Project => &PROJECT,
            DimensionCategory::Custom => &CUSTOM,
        }
    }

    pub fn storage_key(&self) -> &'static str {
        self.spec().storage_key
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    pub fn all() -> [DimensionCategory; 5] {
        [
            DimensionCategory::CostCenter,
            DimensionCategory::ProfitCenter,
            DimensionCategory::InvestmentCenter,
            DimensionCategory::Project,
            DimensionCategory::Custom,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_is_a_pure_function_of_the_category() {
        for category in DimensionCategory::all() {
            assert_eq!(category.storage_key(), category.spec().storage_key);
            // Repeated lookups always return the same static entry.
            assert!(std::ptr::eq(category.spec(), category.spec()));
        }
    }

    #[test]
    fn storage_keys_are_unique_per_category() {
        let keys: std::collections::BTreeSet<_> = DimensionCategory::all()
            .iter()
            .map(|c| c.storage_key())
            .collect();
        assert_eq!(keys.len(), DimensionCategory::all().len());
    }

    #[test]
    fn cost_center_maps_to_the_documented_key() {
        assert_eq!(DimensionCategory::CostCenter.storage_key(), "costCenterId");
        assert_eq!(DimensionCategory::CostCenter.label(), "Cost Center");
    }
}
