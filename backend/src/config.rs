//! Statistics configuration file support.
//!
//! The filter vocabulary and the per-frame size estimate are configuration
//! data, read from a TOML file:
//!
//! ```toml
//! [statistics]
//! frame_size_bytes = 32783040.0
//!
//! [filters]
//! Luminance = "luminance"
//! Ha = "hydrogen"
//! ```
//!
//! A missing `[filters]` table falls back to the built-in vocabulary; a present
//! one replaces it entirely.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{StatsError, StatsResult};
use crate::services::aggregation::{validate_frame_size, StatisticAggregator};
use crate::services::filter_catalog::{FilterCatalog, DEFAULT_FILTERS};

/// Size of one stored frame: a 16-bit 4656x3520 image plus one FITS header
/// block, padded to whole 2880-byte records.
pub const DEFAULT_FRAME_SIZE_BYTES: f64 = 32_783_040.0;

/// Environment variable holding an explicit configuration file path.
pub const CONFIG_PATH_ENV: &str = "OBSERVATORY_CONFIG";

/// Statistics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub statistics: StatisticsSettings,
    #[serde(default = "default_filters")]
    pub filters: BTreeMap<String, String>,
}

/// Numeric settings for the aggregation fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSettings {
    #[serde(default = "default_frame_size_bytes")]
    pub frame_size_bytes: f64,
}

fn default_frame_size_bytes() -> f64 {
    DEFAULT_FRAME_SIZE_BYTES
}

fn default_filters() -> BTreeMap<String, String> {
    DEFAULT_FILTERS
        .iter()
        .map(|(label, id)| (label.to_string(), id.to_string()))
        .collect()
}

impl Default for StatisticsSettings {
    fn default() -> Self {
        Self {
            frame_size_bytes: DEFAULT_FRAME_SIZE_BYTES,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            statistics: StatisticsSettings::default(),
            filters: default_filters(),
        }
    }
}

impl FromStr for StatsConfig {
    type Err = StatsError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: StatsConfig = toml::from_str(content)
            .map_err(|e| StatsError::configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl StatsConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`StatsError::Configuration`] if the file cannot be read, parsed
    /// or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StatsError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = content.parse::<StatsConfig>()?;
        log::info!(
            "Loaded statistics config from {} ({} filter labels)",
            path.as_ref().display(),
            config.filters.len()
        );
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `observatory.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> StatsResult<Self> {
        let search_paths = [
            PathBuf::from("observatory.toml"),
            PathBuf::from("backend/observatory.toml"),
            PathBuf::from("../observatory.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StatsError::configuration(
            "No observatory.toml found in standard locations",
        ))
    }

    /// Resolve configuration for a running process.
    ///
    /// Uses the file named by `OBSERVATORY_CONFIG` when set, then the default
    /// locations, and finally the built-in defaults.
    ///
    /// # Errors
    /// A file that exists but is invalid is an error; only a missing file falls
    /// back to defaults.
    pub fn from_env() -> StatsResult<Self> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        match Self::from_default_location() {
            Ok(config) => Ok(config),
            Err(StatsError::Configuration(msg)) if msg.starts_with("No observatory.toml") => {
                log::info!("No statistics config file found, using built-in defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Check values the TOML schema cannot express.
    pub fn validate(&self) -> StatsResult<()> {
        validate_frame_size(self.statistics.frame_size_bytes)?;
        // Building the catalog rejects empty labels and ids.
        self.filter_catalog().map(|_| ())
    }

    pub fn filter_catalog(&self) -> StatsResult<FilterCatalog> {
        FilterCatalog::from_table(self.filters.clone())
    }

    /// Build the aggregator this configuration describes.
    pub fn build_aggregator(&self) -> StatsResult<StatisticAggregator> {
        StatisticAggregator::new(self.filter_catalog()?, self.statistics.frame_size_bytes)
    }
}
