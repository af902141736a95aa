//! Validating factory for every record variant.
//!
//! The factory holds no state. Each constructor checks all fields, collects
//! every violation, and only returns a record when the whole set is valid.

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::error::{FieldViolation, RecordError};
use crate::kind::MediaKind;
use crate::record::{Book, FieldMap, Film, MagazineArticle, MediaDetails, Record};

/// Accepted publication years.
pub const YEAR_RANGE: RangeInclusive<i64> = 1..=2100;

/// Builds validated [`Record`]s from raw values or structured field maps.
pub struct MediaFactory;

impl MediaFactory {
    pub fn create_book(
        title: &str,
        year: i32,
        author: &str,
        isbn: &str,
        publisher: &str,
        cover_image_path: Option<&str>,
    ) -> Result<Record, RecordError> {
        Self::build_book(
            title,
            i64::from(year),
            author,
            isbn,
            publisher,
            cover_image_path,
        )
    }

    pub fn create_film(
        title: &str,
        year: i32,
        director: &str,
        duration: i32,
        genre: &str,
        cover_image_path: Option<&str>,
    ) -> Result<Record, RecordError> {
        Self::build_film(
            title,
            i64::from(year),
            director,
            i64::from(duration),
            genre,
            cover_image_path,
        )
    }

    pub fn create_magazine_article(
        title: &str,
        year: i32,
        author: &str,
        magazine: &str,
        doi: &str,
        cover_image_path: Option<&str>,
    ) -> Result<Record, RecordError> {
        Self::build_article(
            title,
            i64::from(year),
            author,
            magazine,
            doi,
            cover_image_path,
        )
    }

    /// Build a record from a structured field map, dispatching on `type`.
    ///
    /// Absent or mistyped fields are `MalformedRecord`; well-typed but
    /// invalid values are `InvalidData`.
    pub fn create_from_structured(map: &FieldMap) -> Result<Record, RecordError> {
        let tag = match map.get("type") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(_) => return Err(RecordError::malformed("field 'type' must be a string")),
            None => return Err(RecordError::malformed("missing field 'type'")),
        };
        let kind =
            MediaKind::from_tag(tag).ok_or_else(|| RecordError::UnknownKind(tag.to_string()))?;

        let title = required_str(map, "title")?;
        let year = required_int(map, "year")?;
        let cover = optional_str(map, "coverImagePath")?;

        match kind {
            MediaKind::Book => Self::build_book(
                title,
                year,
                required_str(map, "author")?,
                required_str(map, "isbn")?,
                required_str(map, "publisher")?,
                cover,
            ),
            MediaKind::Film => Self::build_film(
                title,
                year,
                required_str(map, "director")?,
                required_int(map, "duration")?,
                required_str(map, "genre")?,
                cover,
            ),
            MediaKind::MagazineArticle => Self::build_article(
                title,
                year,
                required_str(map, "author")?,
                required_str(map, "magazine")?,
                required_str(map, "doi")?,
                cover,
            ),
        }
    }

    /// Whether `tag` names a supported kind (exact document tag).
    pub fn is_valid_kind(tag: &str) -> bool {
        MediaKind::from_tag(tag).is_some()
    }

    /// Document tags of every supported kind, in a stable order.
    pub fn supported_kinds() -> &'static [&'static str] {
        MediaKind::tags()
    }

    fn build_book(
        title: &str,
        year: i64,
        author: &str,
        isbn: &str,
        publisher: &str,
        cover: Option<&str>,
    ) -> Result<Record, RecordError> {
        finish(book_violations(title, year, author, isbn, publisher))?;

        Ok(Record::new(
            title.to_string(),
            year as i32,
            normalize_cover(cover),
            MediaDetails::Book(Book {
                author: author.to_string(),
                isbn: isbn.to_string(),
                publisher: publisher.to_string(),
            }),
        ))
    }

    fn build_film(
        title: &str,
        year: i64,
        director: &str,
        duration: i64,
        genre: &str,
        cover: Option<&str>,
    ) -> Result<Record, RecordError> {
        finish(film_violations(title, year, director, duration, genre))?;

        Ok(Record::new(
            title.to_string(),
            year as i32,
            normalize_cover(cover),
            MediaDetails::Film(Film {
                director: director.to_string(),
                duration: duration as u32,
                genre: genre.to_string(),
            }),
        ))
    }

    fn build_article(
        title: &str,
        year: i64,
        author: &str,
        magazine: &str,
        doi: &str,
        cover: Option<&str>,
    ) -> Result<Record, RecordError> {
        finish(article_violations(title, year, author, magazine, doi))?;

        Ok(Record::new(
            title.to_string(),
            year as i32,
            normalize_cover(cover),
            MediaDetails::MagazineArticle(MagazineArticle {
                author: author.to_string(),
                magazine: magazine.to_string(),
                doi: doi.to_string(),
            }),
        ))
    }
}

/// Re-run the construction checks against a record's current fields.
pub(crate) fn check_record(record: &Record) -> Result<(), RecordError> {
    let title = record.title.as_str();
    let year = i64::from(record.year);
    finish(match &record.details {
        MediaDetails::Book(b) => book_violations(title, year, &b.author, &b.isbn, &b.publisher),
        MediaDetails::Film(f) => {
            film_violations(title, year, &f.director, i64::from(f.duration), &f.genre)
        }
        MediaDetails::MagazineArticle(a) => {
            article_violations(title, year, &a.author, &a.magazine, &a.doi)
        }
    })
}

fn book_violations(
    title: &str,
    year: i64,
    author: &str,
    isbn: &str,
    publisher: &str,
) -> Vec<FieldViolation> {
    let mut violations = common_violations(title, year);
    require_text(&mut violations, "author", author);
    require_text(&mut violations, "isbn", isbn);
    require_text(&mut violations, "publisher", publisher);
    violations
}

fn film_violations(
    title: &str,
    year: i64,
    director: &str,
    duration: i64,
    genre: &str,
) -> Vec<FieldViolation> {
    let mut violations = common_violations(title, year);
    require_text(&mut violations, "director", director);
    if duration <= 0 {
        violations.push(FieldViolation::new("duration", "must be greater than zero"));
    } else if u32::try_from(duration).is_err() {
        violations.push(FieldViolation::new("duration", "is out of range"));
    }
    require_text(&mut violations, "genre", genre);
    violations
}

fn article_violations(
    title: &str,
    year: i64,
    author: &str,
    magazine: &str,
    doi: &str,
) -> Vec<FieldViolation> {
    let mut violations = common_violations(title, year);
    require_text(&mut violations, "author", author);
    require_text(&mut violations, "magazine", magazine);
    require_text(&mut violations, "doi", doi);
    violations
}

fn common_violations(title: &str, year: i64) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    require_text(&mut violations, "title", title);
    if !YEAR_RANGE.contains(&year) {
        violations.push(FieldViolation::new("year", "must be between 1 and 2100"));
    }
    violations
}

fn require_text(violations: &mut Vec<FieldViolation>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::new(field, "must not be empty"));
    }
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), RecordError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(RecordError::InvalidData(violations))
    }
}

fn normalize_cover(cover: Option<&str>) -> Option<String> {
    cover.filter(|c| !c.is_empty()).map(str::to_string)
}

fn required_str<'a>(map: &'a FieldMap, field: &str) -> Result<&'a str, RecordError> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(RecordError::malformed(format!(
            "field '{field}' must be a string"
        ))),
        None => Err(RecordError::malformed(format!("missing field '{field}'"))),
    }
}

fn required_int(map: &FieldMap, field: &str) -> Result<i64, RecordError> {
    match map.get(field) {
        Some(v) => v.as_i64().ok_or_else(|| {
            RecordError::malformed(format!("field '{field}' must be an integer"))
        }),
        None => Err(RecordError::malformed(format!("missing field '{field}'"))),
    }
}

fn optional_str<'a>(map: &'a FieldMap, field: &str) -> Result<Option<&'a str>, RecordError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(RecordError::malformed(format!(
            "field '{field}' must be a string"
        ))),
    }
}

#[cfg(test)]
#[path = "tests/factory_tests.rs"]
mod tests;
