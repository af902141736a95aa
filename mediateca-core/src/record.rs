//! Record model: the shared attributes plus one variant per media kind.
//!
//! Behavior (detail text, field map, kind tag) is a plain `match` over
//! [`MediaDetails`]; there is no per-variant dispatch table.

use serde_json::Value;

use crate::error::RecordError;
use crate::id::ItemId;
use crate::kind::MediaKind;

/// Structured field map of one record, as written to and read from documents.
pub type FieldMap = serde_json::Map<String, Value>;

/// Book-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub author: String,
    pub isbn: String,
    pub publisher: String,
}

/// Film-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub genre: String,
}

/// Magazine-article-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagazineArticle {
    pub author: String,
    pub magazine: String,
    pub doi: String,
}

/// The variant part of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaDetails {
    Book(Book),
    Film(Film),
    MagazineArticle(MagazineArticle),
}

impl MediaDetails {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Book(_) => MediaKind::Book,
            Self::Film(_) => MediaKind::Film,
            Self::MagazineArticle(_) => MediaKind::MagazineArticle,
        }
    }
}

/// One catalog entry.
///
/// `Clone` copies the identity along with the fields, the same way cloning
/// a handle does. Use [`Record::duplicate`] for a new, independent record.
/// Build records through [`crate::MediaFactory`] so every field is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: ItemId,
    pub title: String,
    pub year: i32,
    pub cover_image_path: Option<String>,
    pub details: MediaDetails,
}

impl Record {
    pub(crate) fn new(
        title: String,
        year: i32,
        cover_image_path: Option<String>,
        details: MediaDetails,
    ) -> Self {
        Self {
            id: ItemId::next(),
            title,
            year,
            cover_image_path,
            details,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> MediaKind {
        self.details.kind()
    }

    /// A new record with equal content and a fresh identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ItemId::next(),
            ..self.clone()
        }
    }

    /// Clone-equality: every field matches, identity ignored.
    pub fn same_content(&self, other: &Record) -> bool {
        self.title == other.title
            && self.year == other.year
            && self.cover_image_path == other.cover_image_path
            && self.details == other.details
    }

    /// Take every field from `other` while keeping this record's identity.
    pub fn replace_content(&mut self, other: Record) {
        self.title = other.title;
        self.year = other.year;
        self.cover_image_path = other.cover_image_path;
        self.details = other.details;
    }

    /// Check the current fields against the rules the factory enforces.
    ///
    /// The factory never produces an invalid record, but the public fields
    /// can be edited after construction.
    pub fn validate(&self) -> Result<(), RecordError> {
        crate::factory::check_record(self)
    }

    pub fn as_book(&self) -> Option<&Book> {
        match &self.details {
            MediaDetails::Book(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_film(&self) -> Option<&Film> {
        match &self.details {
            MediaDetails::Film(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_article(&self) -> Option<&MagazineArticle> {
        match &self.details {
            MediaDetails::MagazineArticle(a) => Some(a),
            _ => None,
        }
    }

    /// Multi-line, human-readable description of every field.
    pub fn detail_text(&self) -> String {
        let cover = self.cover_image_path.as_deref().unwrap_or("-");
        match &self.details {
            MediaDetails::Book(b) => format!(
                "Book: {} ({})\nAuthor: {}\nISBN: {}\nPublisher: {}\nCover: {}",
                self.title, self.year, b.author, b.isbn, b.publisher, cover
            ),
            MediaDetails::Film(f) => format!(
                "Film: {} ({})\nDirector: {}\nDuration: {} min\nGenre: {}\nCover: {}",
                self.title, self.year, f.director, f.duration, f.genre, cover
            ),
            MediaDetails::MagazineArticle(a) => format!(
                "Magazine article: {} ({})\nAuthor: {}\nMagazine: {}\nDOI: {}\nCover: {}",
                self.title, self.year, a.author, a.magazine, a.doi, cover
            ),
        }
    }

    /// Structured field map, tagged with the kind under `type`.
    ///
    /// A missing cover is written as an empty string.
    pub fn to_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        map.insert("type".into(), Value::from(self.kind().tag()));
        map.insert("title".into(), Value::from(self.title.as_str()));
        map.insert("year".into(), Value::from(self.year));
        map.insert(
            "coverImagePath".into(),
            Value::from(self.cover_image_path.as_deref().unwrap_or("")),
        );
        match &self.details {
            MediaDetails::Book(b) => {
                map.insert("author".into(), Value::from(b.author.as_str()));
                map.insert("isbn".into(), Value::from(b.isbn.as_str()));
                map.insert("publisher".into(), Value::from(b.publisher.as_str()));
            }
            MediaDetails::Film(f) => {
                map.insert("director".into(), Value::from(f.director.as_str()));
                map.insert("duration".into(), Value::from(f.duration));
                map.insert("genre".into(), Value::from(f.genre.as_str()));
            }
            MediaDetails::MagazineArticle(a) => {
                map.insert("author".into(), Value::from(a.author.as_str()));
                map.insert("magazine".into(), Value::from(a.magazine.as_str()));
                map.insert("doi".into(), Value::from(a.doi.as_str()));
            }
        }
        map
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.year, self.kind())
    }
}
