//! Read-only access to the observatory's catalog, frame and photo stores.
//!
//! Statistics are always computed from a snapshot returned by one of these
//! fetches. Nothing in the crate writes back through this trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{CatalogEntry, CompositePhoto, FrameRecord};

/// Repository trait for the observatory stores.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ObservatoryRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` - Store is healthy
    /// * `Ok(false)` - Store answered but reports itself unavailable
    /// * `Err(RepositoryError)` - If the check itself fails
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch one catalog entry by object name.
    ///
    /// # Returns
    /// * `Ok(CatalogEntry)` - The entry
    /// * `Err(RepositoryError::NotFound)` - If no entry has that name
    async fn fetch_catalog_entry(&self, name: &str) -> RepositoryResult<CatalogEntry>;

    /// List every catalog entry in storage order.
    async fn list_catalog_entries(&self) -> RepositoryResult<Vec<CatalogEntry>>;

    /// Fetch the raw frames recorded for one object.
    ///
    /// An object without frames yields an empty vector, not an error.
    async fn fetch_frames_for_object(&self, name: &str) -> RepositoryResult<Vec<FrameRecord>>;

    /// Fetch every raw frame of every object.
    async fn fetch_all_frames(&self) -> RepositoryResult<Vec<FrameRecord>>;

    /// Fetch the composite photos of one object.
    async fn fetch_photos_for_object(&self, name: &str) -> RepositoryResult<Vec<CompositePhoto>>;

    /// List every composite photo, newest first.
    async fn list_photos(&self) -> RepositoryResult<Vec<CompositePhoto>>;
}
