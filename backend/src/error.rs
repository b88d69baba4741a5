//! Error types for the statistics core.

use crate::db::repository::RepositoryError;

/// Result type used by the statistics services.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors surfaced by the statistics core.
///
/// Empty input is not an error anywhere in this crate: aggregations and
/// deviations return explicit "no data" values instead. Errors are reserved
/// for conditions the caller has to decide on.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// A value the computation cannot proceed without is absent.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Configuration could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The frame or catalog store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl StatsError {
    /// Create an insufficient-data error naming the missing input.
    pub fn insufficient_data(missing: impl Into<String>) -> Self {
        Self::InsufficientData(missing.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData(_))
    }
}
