//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`ObservatoryRepository`]
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::{ErrorContext, ObservatoryRepository, RepositoryError, RepositoryResult};
use crate::models::{CatalogEntry, CompositePhoto, FrameRecord};

/// In-memory local repository.
///
/// Cloning is cheap and every clone shares the same store.
///
/// # Example
/// ```
/// use observatory_stats::db::repositories::LocalRepository;
/// use observatory_stats::models::CatalogEntry;
///
/// let repo = LocalRepository::new();
/// repo.add_catalog_entry(CatalogEntry::new("M31").with_title("Andromeda Galaxy"));
/// assert_eq!(repo.catalog_count(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    catalog: Vec<CatalogEntry>,
    frames: Vec<FrameRecord>,
    photos: Vec<CompositePhoto>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            frames: Vec::new(),
            photos: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Add a catalog entry, replacing any entry with the same name in place.
    pub fn add_catalog_entry(&self, entry: CatalogEntry) {
        let mut data = self.data.write();
        match data.catalog.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => data.catalog.push(entry),
        }
    }

    /// Append raw frames.
    pub fn add_frames(&self, frames: impl IntoIterator<Item = FrameRecord>) {
        self.data.write().frames.extend(frames);
    }

    /// Append one composite photo.
    pub fn add_photo(&self, photo: CompositePhoto) {
        self.data.write().photos.push(photo);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn catalog_count(&self) -> usize {
        self.data.read().catalog.len()
    }

    pub fn frame_count(&self) -> usize {
        self.data.read().frames.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(
                RepositoryError::connection("Frame store is not healthy").with_operation(operation),
            );
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObservatoryRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn fetch_catalog_entry(&self, name: &str) -> RepositoryResult<CatalogEntry> {
        self.check_health("fetch_catalog_entry")?;
        let data = self.data.read();
        data.catalog
            .iter()
            .find(|e| e.name.as_str() == name)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Catalog entry '{}' not found", name),
                    ErrorContext::new("fetch_catalog_entry")
                        .with_entity("catalog_entry")
                        .with_entity_id(name),
                )
            })
    }

    async fn list_catalog_entries(&self) -> RepositoryResult<Vec<CatalogEntry>> {
        self.check_health("list_catalog_entries")?;
        Ok(self.data.read().catalog.clone())
    }

    async fn fetch_frames_for_object(&self, name: &str) -> RepositoryResult<Vec<FrameRecord>> {
        self.check_health("fetch_frames_for_object")?;
        let data = self.data.read();
        Ok(data
            .frames
            .iter()
            .filter(|f| f.object_id.as_str() == name)
            .cloned()
            .collect())
    }

    async fn fetch_all_frames(&self) -> RepositoryResult<Vec<FrameRecord>> {
        self.check_health("fetch_all_frames")?;
        Ok(self.data.read().frames.clone())
    }

    async fn fetch_photos_for_object(&self, name: &str) -> RepositoryResult<Vec<CompositePhoto>> {
        self.check_health("fetch_photos_for_object")?;
        let data = self.data.read();
        Ok(data
            .photos
            .iter()
            .filter(|p| p.object_id.as_str() == name)
            .cloned()
            .collect())
    }

    async fn list_photos(&self) -> RepositoryResult<Vec<CompositePhoto>> {
        self.check_health("list_photos")?;
        let mut photos = self.data.read().photos.clone();
        photos.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(photos)
    }
}
