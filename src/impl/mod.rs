// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod campaigns_json_datasource;
        pub(crate) mod config_ron_datasource;
        pub(crate) mod passbook_json_datasource;
        pub(crate) mod profile_json_datasource;
        pub(crate) mod reports_json_datasource;
        mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod envelope_model;
        pub(crate) mod profile_image_model;
        pub(crate) mod timestamp_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod portal_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod campaign;
        pub(crate) mod filter_criteria;
        pub(crate) mod page;
        pub(crate) mod passbook;
        pub(crate) mod portal_config;
        pub(crate) mod record;
        pub(crate) mod report;
        pub(crate) mod retailer_profile;
        pub(crate) mod views;
    }
    pub(crate) mod logic {
        pub(crate) mod collection_filter;
        pub(crate) mod pagination_slicer;
        pub(crate) mod passbook_summary;
        pub(crate) mod record_view;
    }
    pub(crate) mod repositories {
        pub(crate) mod portal_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod passbook_usecase;
        pub(crate) mod profile_usecase;
        pub(crate) mod reports_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod page_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::campaign::*;
        pub use crate::domain::entities::filter_criteria::*;
        pub use crate::domain::entities::page::*;
        pub use crate::domain::entities::passbook::*;
        pub use crate::domain::entities::portal_config::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::retailer_profile::*;
        pub use crate::domain::entities::views::*;
    }

    pub mod logic {
        pub use crate::domain::logic::pagination_slicer::paginate;
        pub use crate::domain::logic::record_view::{category_options, distinct_categories, project};
    }
}
