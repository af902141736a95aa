//! Application services shared by every mediateca frontend: settings,
//! session restore and saving, and selection tracking.

pub mod selection;
pub mod session;
pub mod settings;

pub use mediateca_catalog::{
    Catalog, CodecError, ContainerError, KindFilter, LoadReport, SkippedRecord, json,
};
pub use mediateca_core::{ItemId, MediaFactory, MediaKind, Record, RecordError};
pub use selection::Selection;
pub use session::{Session, SessionError, SessionSource};
