//! Storage access for catalog entries, raw frames and composite photos.
//!
//! This module provides abstractions for the observatory stores via the
//! Repository pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Catalog services (services::catalog)                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;

#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, ObservatoryRepository, RepositoryError, RepositoryResult};

/// Check if the backing store is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check(repo: &dyn ObservatoryRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
