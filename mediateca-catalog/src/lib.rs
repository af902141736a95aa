//! Owning record collections and their JSON persistence.
//!
//! [`Container`] is the generic storage with identity checks, [`Catalog`]
//! wraps it with media-specific queries, and [`json`] saves and loads whole
//! catalogs.

pub mod catalog;
pub mod container;
pub mod json;

pub use catalog::{Catalog, KindFilter};
pub use container::{Container, ContainerError, Item};
pub use json::{CodecError, LoadReport, SkippedRecord};
