//! Raw exposure records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ObjectId;

/// One raw exposure captured by the imaging system.
///
/// Records are owned by the external frame store and are read-only here.
/// `focus_metric` and `sky_background_metric` use `0.0` as a "not measured"
/// sentinel, not as a valid reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub object_id: ObjectId,
    /// Free-text filter label as written by the acquisition software.
    pub filter_label: String,
    pub exposure_seconds: f64,
    /// Right ascension in degrees.
    pub ra: f64,
    /// Declination in degrees.
    pub dec: f64,
    /// Half-flux radius; `0.0` when not measured.
    #[serde(default)]
    pub focus_metric: f64,
    /// Sky background level; `0.0` when not measured.
    #[serde(default)]
    pub sky_background_metric: f64,
    #[serde(deserialize_with = "super::time::deserialize_capture_time")]
    pub captured_at: DateTime<Utc>,
}

/// Why a frame record was excluded from a fold.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameRejection {
    #[error("frame has an empty object identifier")]
    EmptyObjectId,

    #[error("exposure must be finite, got {0}")]
    NonFiniteExposure(f64),

    #[error("exposure must not be negative, got {0}")]
    NegativeExposure(f64),

    #[error("coordinates must be finite, got ra={ra} dec={dec}")]
    NonFiniteCoordinates { ra: f64, dec: f64 },
}

impl FrameRecord {
    /// Check the record can take part in aggregation.
    pub fn validate(&self) -> Result<(), FrameRejection> {
        if self.object_id.is_empty() {
            return Err(FrameRejection::EmptyObjectId);
        }
        if !self.exposure_seconds.is_finite() {
            return Err(FrameRejection::NonFiniteExposure(self.exposure_seconds));
        }
        if self.exposure_seconds < 0.0 {
            return Err(FrameRejection::NegativeExposure(self.exposure_seconds));
        }
        if !self.ra.is_finite() || !self.dec.is_finite() {
            return Err(FrameRejection::NonFiniteCoordinates {
                ra: self.ra,
                dec: self.dec,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Coordinates as an `(ra, dec)` sample.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.ra, self.dec)
    }

    /// Focus metric, or `None` when the sentinel says it was not measured.
    pub fn measured_focus(&self) -> Option<f64> {
        measured(self.focus_metric)
    }

    /// Sky background metric, or `None` when not measured.
    pub fn measured_sky_background(&self) -> Option<f64> {
        measured(self.sky_background_metric)
    }
}

fn measured(value: f64) -> Option<f64> {
    if value == 0.0 || !value.is_finite() {
        None
    } else {
        Some(value)
    }
}
