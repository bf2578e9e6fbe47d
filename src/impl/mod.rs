// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod models {
        pub(crate) mod base_payload_model;
        pub(crate) mod rule_payload_model;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod allocation_base;
        pub(crate) mod allocation_rule;
        pub(crate) mod allocation_run;
        pub(crate) mod dimension;
        pub(crate) mod ids;
        pub(crate) mod mutation_token;
        pub(crate) mod status;
    }
    pub(crate) mod logic {
        pub(crate) mod base_editor;
        pub(crate) mod rule_editor;
        pub(crate) mod validation;
    }
    pub(crate) mod repositories {
        pub(crate) mod allocation_engine;
        pub(crate) mod allocation_store;
    }
    pub(crate) mod usecases {
        pub(crate) mod workflow_usecase;
    }
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from
    // the internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::allocation_base::*;
        pub use crate::domain::entities::allocation_rule::*;
        pub use crate::domain::entities::allocation_run::*;
        pub use crate::domain::entities::dimension::*;
        pub use crate::domain::entities::ids::*;
        pub use crate::domain::entities::mutation_token::*;
        pub use crate::domain::entities::status::*;
    }

    pub mod editors {
        pub use crate::domain::logic::base_editor::*;
        pub use crate::domain::logic::rule_editor::*;
        pub use crate::domain::logic::validation::*;
    }

    pub mod contracts {
        pub use crate::domain::repositories::allocation_engine::*;
        pub use crate::domain::repositories::allocation_store::*;
    }

    pub mod payloads {
        pub use crate::data::models::base_payload_model::*;
        pub use crate::data::models::rule_payload_model::*;
    }

    pub mod workflow {
        pub use crate::domain::usecases::workflow_usecase::{AllocationWorkflow, PostOutcome};
    }
}
