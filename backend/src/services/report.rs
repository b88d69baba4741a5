//! Report assembly.
//!
//! Builders call each statistics component once and place the results next to
//! the catalog entry. Nothing is recomputed and nothing is written back into
//! the entry.

use chrono::{DateTime, Utc};
use log::debug;

use crate::api::{CatalogItem, ObjectReport};
use crate::models::time::latest;
use crate::models::{CatalogEntry, FrameRecord};
use crate::services::aggregation::StatisticAggregator;
use crate::services::deviation::compute_frame_deviation;
use crate::services::freshness::is_outdated;
use crate::services::series::build_chart_series;

/// Attach statistics for `entry` computed from a (possibly mixed-object)
/// record set.
pub fn build_catalog_item(
    entry: &CatalogEntry,
    records: &[FrameRecord],
    aggregator: &StatisticAggregator,
) -> CatalogItem {
    let aggregation = aggregator.aggregate(records, Some(entry.name.as_str()));
    CatalogItem {
        entry: entry.clone(),
        statistic: aggregation.statistic,
        filters: aggregation.filters,
    }
}

/// Build catalog items for every entry with one pass over `records`.
///
/// Entries without frames get zero statistics and an empty breakdown.
pub fn build_catalog_list(
    entries: &[CatalogEntry],
    records: &[FrameRecord],
    aggregator: &StatisticAggregator,
) -> Vec<CatalogItem> {
    let per_object = aggregator.aggregate_by_object(records);

    entries
        .iter()
        .map(|entry| {
            let aggregation = per_object
                .get(entry.name.as_str())
                .cloned()
                .unwrap_or_default();
            CatalogItem {
                entry: entry.clone(),
                statistic: aggregation.statistic,
                filters: aggregation.filters,
            }
        })
        .collect()
}

/// Build the full object-page report.
///
/// `photo_timestamps` are the creation dates of the object's composite photos.
/// When either side of the freshness check is missing, `outdated` is left
/// `None` instead of defaulting to `false`.
pub fn build_object_report(
    entry: &CatalogEntry,
    records: &[FrameRecord],
    photo_timestamps: &[DateTime<Utc>],
    aggregator: &StatisticAggregator,
) -> ObjectReport {
    let object_records: Vec<&FrameRecord> = records
        .iter()
        .filter(|r| r.object_id == entry.name)
        .collect();

    let aggregation = aggregator.aggregate(object_records.iter().copied(), None);
    let deviation = compute_frame_deviation(object_records.iter().copied());
    let charts = build_chart_series(object_records.iter().copied());

    let latest_frame = latest(
        object_records
            .iter()
            .filter(|r| r.is_valid())
            .map(|r| r.captured_at),
    );
    let latest_photo = latest(photo_timestamps.iter().copied());

    let outdated = match is_outdated(latest_photo, latest_frame) {
        Ok(outdated) => Some(outdated),
        Err(e) => {
            debug!("Freshness of '{}' left unset: {}", entry.name, e);
            None
        }
    };

    ObjectReport {
        entry: entry.clone(),
        statistic: aggregation.statistic,
        filters: aggregation.filters,
        deviation,
        outdated,
        rejected_frames: aggregation.rejected_count,
        charts,
    }
}
