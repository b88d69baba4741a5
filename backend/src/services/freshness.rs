//! Staleness of composite photos.
//!
//! A composite is outdated when raw frames newer than it exist, meaning a new
//! stack could be built.

use chrono::{DateTime, Utc};

use crate::error::{StatsError, StatsResult};

/// Decide whether the latest composite photo predates the latest raw frame.
///
/// Returns `true` iff the frame timestamp is strictly later than the photo
/// timestamp.
///
/// # Errors
/// [`StatsError::InsufficientData`] when either timestamp is absent. The
/// caller picks the fallback (usually: show no staleness banner).
pub fn is_outdated(
    latest_photo: Option<DateTime<Utc>>,
    latest_frame: Option<DateTime<Utc>>,
) -> StatsResult<bool> {
    let photo = latest_photo
        .ok_or_else(|| StatsError::insufficient_data("latest composite photo timestamp"))?;
    let frame =
        latest_frame.ok_or_else(|| StatsError::insufficient_data("latest raw frame timestamp"))?;
    Ok(frame > photo)
}
