/// Media kind identifiers for every record variant.
///
/// The closed set of kinds lives here so tags, display names, and aliases
/// are never matched ad hoc elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Book,
    Film,
    MagazineArticle,
}

/// All kinds in registration order.
const ALL_KINDS: &[MediaKind] = &[MediaKind::Book, MediaKind::Film, MediaKind::MagazineArticle];

/// Document tags in registration order.
const ALL_TAGS: &[&str] = &["Book", "Film", "MagazineArticle"];

impl MediaKind {
    /// Tag written to the `type` field of persisted records.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Film => "Film",
            Self::MagazineArticle => "MagazineArticle",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Film => "Film",
            Self::MagazineArticle => "Magazine article",
        }
    }

    /// All accepted names for this kind (case-insensitive matching).
    ///
    /// The first alias is the canonical CLI name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Book => &["book", "books", "libro"],
            Self::Film => &["film", "films", "movie", "movies"],
            Self::MagazineArticle => &[
                "article",
                "articles",
                "magazinearticle",
                "magazine-article",
                "magazine article",
            ],
        }
    }

    /// Strict lookup by document tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.tag() == tag)
    }

    pub fn all() -> &'static [MediaKind] {
        ALL_KINDS
    }

    /// Every document tag, in registration order.
    pub fn tags() -> &'static [&'static str] {
        ALL_TAGS
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `MediaKind`.
#[derive(Debug, Clone)]
pub struct MediaKindParseError(pub String);

impl std::fmt::Display for MediaKindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown media kind: '{}'", self.0)
    }
}

impl std::error::Error for MediaKindParseError {}

impl std::str::FromStr for MediaKind {
    type Err = MediaKindParseError;

    /// Parse a kind from its tag or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &kind in ALL_KINDS {
            if kind.tag().to_lowercase() == lower {
                return Ok(kind);
            }
            if kind.aliases().contains(&lower.as_str()) {
                return Ok(kind);
            }
        }
        Err(MediaKindParseError(s.to_string()))
    }
}
