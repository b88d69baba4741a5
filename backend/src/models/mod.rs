//! Domain records read from the frame store and the catalog directory.

pub mod catalog;
pub mod frame;
pub mod macros;
pub mod time;

crate::define_name_type!(
    /// Catalog object identifier (e.g. `M31`, `NGC 7000`).
    ObjectId
);

crate::define_name_type!(
    /// Canonical filter identifier produced by the filter catalog.
    FilterId
);

impl FilterId {
    /// Reserved identifier for labels missing from the filter catalog.
    pub const UNKNOWN: &'static str = "unknown";

    pub fn unknown() -> Self {
        FilterId::new(Self::UNKNOWN)
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

pub use catalog::{CatalogEntry, CompositePhoto};
pub use frame::{FrameRecord, FrameRejection};
