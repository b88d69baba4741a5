//! # Observatory Statistics
//!
//! Statistics engine for an observatory's catalog website.
//!
//! Raw frames captured for each catalog object are folded into exposure
//! totals, per-filter breakdowns, data size estimates, pointing spread and a
//! freshness flag for the object's composite photo.
//!
//! ## Architecture
//!
//! - [`models`]: Domain records (frames, catalog entries, photos) and time helpers
//! - [`api`]: Serializable response DTOs
//! - [`services`]: Aggregation, deviation, freshness and report assembly
//! - [`db`]: Repository trait and the in-memory implementation
//! - [`config`]: TOML configuration for the filter vocabulary and frame size
//! - [`algorithms`]: Numeric primitives (exact summation)
//!
//! ## Example
//!
//! ```
//! use observatory_stats::models::{FrameRecord, ObjectId};
//! use observatory_stats::services::StatisticAggregator;
//! use chrono::Utc;
//!
//! let frames = vec![FrameRecord {
//!     object_id: ObjectId::new("M31"),
//!     filter_label: "Ha".to_string(),
//!     exposure_seconds: 300.0,
//!     ra: 10.684,
//!     dec: 41.269,
//!     focus_metric: 0.0,
//!     sky_background_metric: 0.0,
//!     captured_at: Utc::now(),
//! }];
//!
//! let result = StatisticAggregator::default().aggregate(&frames, Some("M31"));
//! assert_eq!(result.statistic.frame_count, 1);
//! assert_eq!(result.filters["hydrogen"].total_exposure_seconds, 300.0);
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod algorithms;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use config::StatsConfig;
pub use error::{StatsError, StatsResult};
