//! # API Module
//!
//! Public surface of the statistics core: the response DTOs plus the domain
//! records callers construct.
//!
//! - [`types`]: serializable response structures

pub mod types;

pub use types::*;

pub use crate::models::{
    CatalogEntry, CompositePhoto, FilterId, FrameRecord, FrameRejection, ObjectId,
};
