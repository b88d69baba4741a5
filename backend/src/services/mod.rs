//! Service layer for statistics and orchestration.
//!
//! The synchronous modules are pure folds over frame snapshots; [`catalog`]
//! fetches those snapshots from a repository and feeds them through.

pub mod aggregation;
pub mod catalog;
pub mod deviation;
pub mod filter_catalog;
pub mod freshness;
pub mod photos;
pub mod report;
pub mod series;

pub use aggregation::{estimate_data_size, Aggregation, StatisticAccumulator, StatisticAggregator};
pub use catalog::{
    get_catalog_item, get_catalog_list, get_categories, get_object_report, get_photo_listing,
};
pub use deviation::{compute_deviation, compute_frame_deviation};
pub use filter_catalog::{FilterCatalog, DEFAULT_FILTERS};
pub use freshness::is_outdated;
pub use photos::{build_photo_listing, filter_by_category, list_categories, photo_parameters};
pub use report::{build_catalog_item, build_catalog_list, build_object_report};
pub use series::build_chart_series;
