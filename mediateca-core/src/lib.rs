//! Media record model and validating factory.
//!
//! Defines the closed set of media kinds (books, films, magazine articles),
//! the [`Record`] type shared by every kind, and [`MediaFactory`], the only
//! sanctioned way to build a record from raw or structured input.

pub mod error;
pub mod factory;
pub mod id;
pub mod kind;
pub mod record;

pub use error::{FieldViolation, RecordError};
pub use factory::MediaFactory;
pub use id::ItemId;
pub use kind::{MediaKind, MediaKindParseError};
pub use record::{Book, FieldMap, Film, MagazineArticle, MediaDetails, Record};
