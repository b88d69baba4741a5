//! Async catalog services.
//!
//! These functions fetch a snapshot from an [`ObservatoryRepository`] and hand
//! it to the synchronous builders in [`crate::services::report`] and
//! [`crate::services::photos`]. All awaiting happens before the fold starts.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::api::{CatalogItem, ObjectReport, PhotoListing};
use crate::db::repository::{ObservatoryRepository, RepositoryError};
use crate::error::StatsResult;
use crate::services::aggregation::StatisticAggregator;
use crate::services::photos::{build_photo_listing, filter_by_category, list_categories};
use crate::services::report::{build_catalog_item, build_catalog_list, build_object_report};

/// Catalog entry `name` with statistics over its frames.
///
/// # Errors
/// `NotFound` when the catalog has no such entry. Fetch failures propagate.
pub async fn get_catalog_item(
    repo: &dyn ObservatoryRepository,
    aggregator: &StatisticAggregator,
    name: &str,
) -> StatsResult<CatalogItem> {
    let entry = repo.fetch_catalog_entry(name).await?;
    let frames = repo.fetch_frames_for_object(name).await?;
    Ok(build_catalog_item(&entry, &frames, aggregator))
}

/// Every catalog entry with its statistics.
///
/// The whole frame set is fetched once and folded per object on the blocking
/// thread pool.
pub async fn get_catalog_list(
    repo: &dyn ObservatoryRepository,
    aggregator: &StatisticAggregator,
) -> StatsResult<Vec<CatalogItem>> {
    let entries = repo.list_catalog_entries().await?;
    let frames = repo.fetch_all_frames().await?;
    info!(
        "Building catalog list for {} entries from {} frames",
        entries.len(),
        frames.len()
    );

    let aggregator = aggregator.clone();
    let items = tokio::task::spawn_blocking(move || {
        build_catalog_list(&entries, &frames, &aggregator)
    })
    .await
    .map_err(|e| {
        RepositoryError::internal(format!("Catalog list task join error: {}", e))
            .with_operation("get_catalog_list")
    })?;

    Ok(items)
}

/// Full object-page report for `name`.
pub async fn get_object_report(
    repo: &dyn ObservatoryRepository,
    aggregator: &StatisticAggregator,
    name: &str,
) -> StatsResult<ObjectReport> {
    let entry = repo.fetch_catalog_entry(name).await?;
    let frames = repo.fetch_frames_for_object(name).await?;
    let photos = repo.fetch_photos_for_object(name).await?;

    let photo_timestamps: Vec<DateTime<Utc>> = photos.iter().map(|p| p.date).collect();
    debug!(
        "Object '{}': {} frames, {} composite photos",
        name,
        frames.len(),
        photo_timestamps.len()
    );

    Ok(build_object_report(
        &entry,
        &frames,
        &photo_timestamps,
        aggregator,
    ))
}

/// Gallery listing, newest first, optionally restricted to one category.
pub async fn get_photo_listing(
    repo: &dyn ObservatoryRepository,
    aggregator: &StatisticAggregator,
    category: Option<&str>,
) -> StatsResult<Vec<PhotoListing>> {
    let photos = repo.list_photos().await?;
    let entries = repo.list_catalog_entries().await?;
    let frames = repo.fetch_all_frames().await?;

    let listings = build_photo_listing(&photos, &entries, &frames, aggregator);
    Ok(filter_by_category(&listings, category)
        .into_iter()
        .cloned()
        .collect())
}

/// Distinct catalog categories for the gallery menu.
pub async fn get_categories(repo: &dyn ObservatoryRepository) -> StatsResult<Vec<String>> {
    let entries = repo.list_catalog_entries().await?;
    Ok(list_categories(&entries))
}
