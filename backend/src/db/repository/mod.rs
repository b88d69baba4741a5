//! Repository trait definitions for the observatory stores.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`observatory`]: Catalog, frame and photo fetches
//!
//! Services take `&dyn ObservatoryRepository`, so any backend can be plugged
//! in without touching the statistics code:
//!
//! ```ignore
//! async fn my_service(repo: &dyn ObservatoryRepository) -> StatsResult<()> {
//!     let frames = repo.fetch_frames_for_object("M31").await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod observatory;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use observatory::ObservatoryRepository;
