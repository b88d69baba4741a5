//! Catalog directory entries and composite photos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ObjectId;

/// Catalog metadata for one astronomical object.
///
/// Owned by the external catalog directory. Statistics are attached next to
/// it in [`crate::api::CatalogItem`], never written into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: ObjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ra: Option<f64>,
    #[serde(default)]
    pub dec: Option<f64>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<ObjectId>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            text: String::new(),
            category: String::new(),
            ra: None,
            dec: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// A processed image stacked from raw frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositePhoto {
    pub object_id: ObjectId,
    /// When the composite was produced.
    pub date: DateTime<Utc>,
    /// Stored file name without extension.
    pub file: String,
    pub ext: String,
}
