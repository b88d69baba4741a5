//! Photo gallery listing.
//!
//! Composite photos carry only the object name; the gallery shows each one
//! with its catalog entry's category, title and text, plus the statistics of
//! the frames that existed when the composite was made. Those statistics come
//! from the same [`StatisticAggregator`] as the catalog page.

use std::collections::{HashMap, HashSet};

use crate::api::{PhotoListing, PhotoParameters};
use crate::models::{CatalogEntry, CompositePhoto, FrameRecord};
use crate::services::aggregation::StatisticAggregator;

/// Distinct non-empty catalog categories in first-seen order.
pub fn list_categories(entries: &[CatalogEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| !e.category.is_empty())
        .filter(|e| seen.insert(e.category.as_str()))
        .map(|e| e.category.clone())
        .collect()
}

/// Statistics of `frames` captured no later than `photo.date`.
///
/// `frames` may mix objects; only the photo's object counts. Returns `None`
/// when no valid frame qualifies.
pub fn photo_parameters<'a, I>(
    photo: &CompositePhoto,
    frames: I,
    aggregator: &StatisticAggregator,
) -> Option<PhotoParameters>
where
    I: IntoIterator<Item = &'a FrameRecord>,
{
    let aggregation = aggregator.aggregate(
        frames
            .into_iter()
            .filter(|f| f.object_id == photo.object_id && f.captured_at <= photo.date),
        None,
    );
    if aggregation.is_empty() {
        return None;
    }
    Some(PhotoParameters {
        statistic: aggregation.statistic,
        filters: aggregation.filters,
    })
}

/// Enrich photos with their catalog entry's presentation fields and the
/// statistics of the frames stacked into them.
///
/// Photos of objects missing from the catalog are kept without presentation
/// fields. With duplicate catalog names the last entry wins.
pub fn build_photo_listing(
    photos: &[CompositePhoto],
    entries: &[CatalogEntry],
    records: &[FrameRecord],
    aggregator: &StatisticAggregator,
) -> Vec<PhotoListing> {
    let by_name: HashMap<&str, &CatalogEntry> =
        entries.iter().map(|e| (e.name.as_str(), e)).collect();

    let mut frames_by_object: HashMap<&str, Vec<&FrameRecord>> = HashMap::new();
    for record in records {
        frames_by_object
            .entry(record.object_id.as_str())
            .or_default()
            .push(record);
    }

    photos
        .iter()
        .map(|photo| {
            let entry = by_name.get(photo.object_id.as_str());
            let parameters = frames_by_object
                .get(photo.object_id.as_str())
                .and_then(|frames| photo_parameters(photo, frames.iter().copied(), aggregator));
            PhotoListing {
                photo: photo.clone(),
                category: entry.map(|e| e.category.clone()),
                title: entry.map(|e| e.title.clone()),
                text: entry.map(|e| e.text.clone()),
                parameters,
            }
        })
        .collect()
}

/// Keep listings of one category; `None` or an empty category keeps all.
pub fn filter_by_category<'a>(
    listings: &'a [PhotoListing],
    category: Option<&str>,
) -> Vec<&'a PhotoListing> {
    match category {
        None | Some("") => listings.iter().collect(),
        Some(category) => listings
            .iter()
            .filter(|l| l.category.as_deref() == Some(category))
            .collect(),
    }
}
