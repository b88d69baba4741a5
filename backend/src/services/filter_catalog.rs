//! Filter label normalization.
//!
//! Acquisition software writes free-text filter labels into frame headers.
//! [`FilterCatalog`] maps the known labels to canonical [`FilterId`]s and sends
//! everything else to the reserved `unknown` bucket. Matching is exact and
//! case-sensitive so visually similar labels are never merged silently.

use std::collections::HashMap;

use crate::error::{StatsError, StatsResult};
use crate::models::FilterId;

/// Built-in label vocabulary: `(label, canonical id)`.
pub const DEFAULT_FILTERS: [(&str, &str); 8] = [
    ("Luminance", "luminance"),
    ("Red", "red"),
    ("Green", "green"),
    ("Blue", "blue"),
    ("Ha", "hydrogen"),
    ("OIII", "oxygen"),
    ("SII", "sulfur"),
    ("CLEAR", "clear"),
];

/// Label → canonical filter lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCatalog {
    labels: HashMap<String, FilterId>,
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self {
            labels: DEFAULT_FILTERS
                .iter()
                .map(|(label, id)| (label.to_string(), FilterId::new(*id)))
                .collect(),
        }
    }
}

impl FilterCatalog {
    /// Build a catalog from an arbitrary label → id table.
    ///
    /// # Errors
    /// Returns [`StatsError::Configuration`] if a label or an id is empty or
    /// whitespace only.
    pub fn from_table<I, L, F>(table: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = (L, F)>,
        L: Into<String>,
        F: Into<String>,
    {
        let mut labels = HashMap::new();
        for (label, id) in table {
            let label = label.into();
            let id = id.into();
            if label.trim().is_empty() {
                return Err(StatsError::configuration(format!(
                    "filter label for id '{}' must not be empty",
                    id
                )));
            }
            if id.trim().is_empty() {
                return Err(StatsError::configuration(format!(
                    "filter id for label '{}' must not be empty",
                    label
                )));
            }
            labels.insert(label, FilterId::new(id));
        }
        Ok(Self { labels })
    }

    /// Map a raw label to its canonical id, or to `unknown`.
    pub fn canonicalize(&self, raw_label: &str) -> FilterId {
        self.lookup(raw_label).cloned().unwrap_or_else(FilterId::unknown)
    }

    /// Canonical id for a known label, `None` otherwise.
    pub fn lookup(&self, raw_label: &str) -> Option<&FilterId> {
        self.labels.get(raw_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let catalog = FilterCatalog::default();
        for (label, id) in DEFAULT_FILTERS {
            assert_eq!(catalog.lookup(label).map(|f| f.as_str()), Some(id));
        }
        assert_eq!(catalog.canonicalize("Luminance").as_str(), "luminance");
        assert_eq!(catalog.canonicalize("Ha").as_str(), "hydrogen");
        assert_eq!(catalog.canonicalize("OIII").as_str(), "oxygen");
        assert_eq!(catalog.canonicalize("SII").as_str(), "sulfur");
        assert_eq!(catalog.canonicalize("CLEAR").as_str(), "clear");
    }

    #[test]
    fn test_blue_maps_to_blue() {
        let catalog = FilterCatalog::default();
        assert_eq!(catalog.canonicalize("Blue").as_str(), "blue");
        assert_ne!(catalog.canonicalize("Blue"), catalog.canonicalize("Green"));
    }

    #[test]
    fn test_unknown_label() {
        let catalog = FilterCatalog::default();
        let id = catalog.canonicalize("Unknown-XYZ");
        assert!(id.is_unknown());
        assert!(catalog.lookup("Unknown-XYZ").is_none());
    }

    #[test]
    fn test_case_sensitive() {
        let catalog = FilterCatalog::default();
        assert!(catalog.canonicalize("luminance").is_unknown());
        assert!(catalog.canonicalize("HA").is_unknown());
        assert!(catalog.canonicalize("Clear").is_unknown());
        assert!(catalog.canonicalize(" Red").is_unknown());
    }

    #[test]
    fn test_custom_table() {
        let catalog = FilterCatalog::from_table(vec![("L", "luminance"), ("H-alpha", "hydrogen")])
            .unwrap();
        assert_eq!(catalog.canonicalize("H-alpha").as_str(), "hydrogen");
        assert!(catalog.canonicalize("Ha").is_unknown());
    }

    #[test]
    fn test_empty_label_rejected() {
        let result = FilterCatalog::from_table(vec![("", "luminance")]);
        assert!(matches!(result, Err(StatsError::Configuration(_))));
    }

    #[test]
    fn test_blank_label_rejected() {
        for label in [" ", "\t"] {
            let result = FilterCatalog::from_table(vec![(label, "luminance")]);
            assert!(matches!(result, Err(StatsError::Configuration(_))));
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = FilterCatalog::from_table(vec![("L", "  ")]);
        assert!(matches!(result, Err(StatsError::Configuration(_))));
    }
}
