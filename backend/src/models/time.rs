//! Capture-time helpers.
//!
//! Frame stores record the capture time either as a FITS `DATE-OBS` string or
//! as a Modified Julian Date (`MJD-OBS`). Both are normalized to
//! `DateTime<Utc>` before records reach the statistics core.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

/// MJD of the Unix epoch (1970-01-01T00:00:00Z).
const MJD_UNIX_EPOCH: f64 = 40587.0;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Parse a FITS `DATE-OBS` value.
///
/// Accepts RFC 3339 timestamps and the FITS form without a zone designator
/// (`YYYY-MM-DDThh:mm:ss[.sss]`), which is UTC by definition.
pub fn parse_date_obs(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Convert a Modified Julian Date to UTC.
///
/// Returns `None` for non-finite input or dates outside chrono's range.
pub fn mjd_to_datetime(mjd: f64) -> Option<DateTime<Utc>> {
    if !mjd.is_finite() {
        return None;
    }
    let secs = (mjd - MJD_UNIX_EPOCH) * SECONDS_PER_DAY;
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Convert UTC to a Modified Julian Date.
pub fn datetime_to_mjd(dt: DateTime<Utc>) -> f64 {
    let secs = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
    secs / SECONDS_PER_DAY + MJD_UNIX_EPOCH
}

/// Most recent timestamp of a set, or `None` when the set is empty.
pub fn latest<I>(timestamps: I) -> Option<DateTime<Utc>>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    timestamps.into_iter().max()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCaptureTime {
    DateObs(String),
    Mjd(f64),
}

/// Deserialize a capture time given either as a `DATE-OBS` string or as an MJD
/// number. Use with `#[serde(deserialize_with = ...)]`.
pub fn deserialize_capture_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCaptureTime::deserialize(deserializer)? {
        RawCaptureTime::DateObs(value) => parse_date_obs(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid DATE-OBS value '{}'", value))),
        RawCaptureTime::Mjd(mjd) => {
            mjd_to_datetime(mjd).ok_or_else(|| de::Error::custom(format!("invalid MJD {}", mjd)))
        }
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
