//! Response Data Transfer Objects (DTOs).
//!
//! These are the structures handed to presentation code (tables, charts) and
//! serialized into response payloads.
//!
//! ## Design Guidelines
//!
//! 1. **Plain numbers**: counts, exposure totals, sizes and ranges serialize as
//!    JSON numbers, never strings
//! 2. **Explicit absence**: "no data" serializes as `null`, never as `0`
//! 3. **Full precision**: rounding for display is the consumer's job
//! 4. **Built, not patched**: catalog entries are embedded by value next to the
//!    computed statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CatalogEntry, CompositePhoto, FilterId};

// =========================================================
// Statistics
// =========================================================

/// Accumulated totals for one canonical filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterStatistic {
    pub frame_count: u64,
    /// Exact sum of the contributing frames' exposure, in seconds.
    pub total_exposure_seconds: f64,
}

/// Accumulated totals for one object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectStatistic {
    pub frame_count: u64,
    pub total_exposure_seconds: f64,
    /// `frame_count × frame_size_bytes`, rounded half away from zero.
    pub estimated_data_size_bytes: u64,
}

/// Per-filter breakdown keyed by canonical filter id.
pub type FilterBreakdown = BTreeMap<FilterId, FilterStatistic>;

// =========================================================
// Astrometry
// =========================================================

/// Spread and centroid of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDeviation {
    pub min: f64,
    pub max: f64,
    /// `max - min`
    pub range: f64,
    /// Arithmetic mean of the samples.
    pub centroid: f64,
}

/// Pointing spread over a set of `(ra, dec)` samples, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationResult {
    pub ra: AxisDeviation,
    pub dec: AxisDeviation,
    pub sample_count: usize,
}

/// Plotting series for the object page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// `[ra, dec]` pairs in frame order.
    pub coordinates: Vec<[f64; 2]>,
    pub ra: Vec<f64>,
    pub dec: Vec<f64>,
    /// Measured focus (HFR) values; unmeasured frames are left out.
    pub focus: Vec<f64>,
    /// Measured sky background values; unmeasured frames are left out.
    pub sky_background: Vec<f64>,
}

// =========================================================
// Catalog
// =========================================================

/// Catalog entry with its computed statistics attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub statistic: ObjectStatistic,
    pub filters: FilterBreakdown,
}

/// Everything the object page shows about one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectReport {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub statistic: ObjectStatistic,
    pub filters: FilterBreakdown,
    /// `None` when the object has no usable frames.
    pub deviation: Option<DeviationResult>,
    /// `None` when either the composite or the frame timestamp is missing.
    pub outdated: Option<bool>,
    /// Frames excluded from every computation as malformed.
    pub rejected_frames: usize,
    pub charts: ChartSeries,
}

/// Statistics of the raw frames available when a composite was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoParameters {
    pub statistic: ObjectStatistic,
    pub filters: FilterBreakdown,
}

/// A composite photo enriched with its catalog entry's presentation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoListing {
    #[serde(flatten)]
    pub photo: CompositePhoto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// `None` when no usable frame of the object predates the photo.
    #[serde(default)]
    pub parameters: Option<PhotoParameters>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_statistic_serializes_numbers() {
        let stat = ObjectStatistic {
            frame_count: 3,
            total_exposure_seconds: 540.5,
            estimated_data_size_bytes: 98_349_120,
        };
        let json = serde_json::to_value(stat).unwrap();
        assert_eq!(json["frame_count"], 3);
        assert_eq!(json["total_exposure_seconds"], 540.5);
        assert_eq!(json["estimated_data_size_bytes"], 98_349_120u64);
    }

    #[test]
    fn test_filter_breakdown_keys_are_strings() {
        let mut filters = FilterBreakdown::new();
        filters.insert(
            FilterId::new("hydrogen"),
            FilterStatistic {
                frame_count: 2,
                total_exposure_seconds: 600.0,
            },
        );
        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(
            json,
            r#"{"hydrogen":{"frame_count":2,"total_exposure_seconds":600.0}}"#
        );
    }

    #[test]
    fn test_catalog_item_flattens_entry() {
        let item = CatalogItem {
            entry: CatalogEntry::new("M31").with_category("galaxies"),
            statistic: ObjectStatistic::default(),
            filters: FilterBreakdown::new(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "M31");
        assert_eq!(json["category"], "galaxies");
        assert_eq!(json["statistic"]["frame_count"], 0);
        assert!(json["filters"].as_object().unwrap().is_empty());
    }
}
