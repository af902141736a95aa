//! Domain-facing catalog of media records.

use mediateca_core::{ItemId, MediaKind, Record};

use crate::container::{Container, ContainerError};

/// Which kinds a view should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    BooksOnly,
    FilmsOnly,
    ArticlesOnly,
}

impl KindFilter {
    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            Self::All => true,
            Self::BooksOnly => kind == MediaKind::Book,
            Self::FilmsOnly => kind == MediaKind::Film,
            Self::ArticlesOnly => kind == MediaKind::MagazineArticle,
        }
    }

    /// The filter that admits exactly `kind`.
    pub fn only(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Book => Self::BooksOnly,
            MediaKind::Film => Self::FilmsOnly,
            MediaKind::MagazineArticle => Self::ArticlesOnly,
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = mediateca_core::MediaKindParseError;

    /// `all` or any name accepted by [`MediaKind`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<MediaKind>().map(Self::only)
    }
}

/// Ordered collection of unique records, the sole owner of each one.
///
/// Cloning a catalog duplicates every record; the copy and the original
/// share no state and their records have distinct identities.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Container<Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> Result<ItemId, ContainerError> {
        self.records.add(record)
    }

    pub fn remove_record(&mut self, id: ItemId) -> Result<Record, ContainerError> {
        self.records.remove(id)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Record, ContainerError> {
        self.records.remove_at(index)
    }

    pub fn get_at(&self, index: usize) -> Result<&Record, ContainerError> {
        self.records.at(index)
    }

    pub fn get(&self, id: ItemId) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.records.position(id)
    }

    /// Overwrite the record at `index` with the content of `replacement`.
    ///
    /// The stored record keeps its identity and position; `replacement`'s own
    /// identity is discarded. A replacement that fails validation is refused.
    pub fn update_at(&mut self, index: usize, replacement: Record) -> Result<ItemId, ContainerError> {
        if replacement.validate().is_err() {
            return Err(ContainerError::InvalidItem);
        }
        let record = self.records.at_mut(index)?;
        record.replace_content(replacement);
        Ok(record.id())
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replace the whole content with `other`'s records.
    pub fn replace_with(&mut self, other: Catalog) {
        self.records = other.records;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<&Record> {
        self.records.all()
    }

    /// Records whose title contains `needle`, ignoring case.
    pub fn search_by_title(&self, needle: &str) -> Vec<&Record> {
        let needle = needle.to_lowercase();
        self.filter(|r| r.title.to_lowercase().contains(&needle))
    }

    pub fn search_by_year(&self, year: i32) -> Vec<&Record> {
        self.filter(|r| r.year == year)
    }

    pub fn collect_by_kind(&self, filter: KindFilter) -> Vec<&Record> {
        self.filter(|r| filter.matches(r.kind()))
    }

    /// Records matching `predicate`, in catalog order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&Record>
    where
        P: FnMut(&Record) -> bool,
    {
        self.records.find(predicate)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
