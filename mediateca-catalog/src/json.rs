//! JSON persistence for whole catalogs.
//!
//! Document shape:
//!
//! ```text
//! { "biblioteca": [ { "type": "Book", "title": ..., "year": ..., ... }, ... ] }
//! ```
//!
//! Loading is best-effort per element: a record that fails to build is
//! skipped and reported in [`LoadReport::skipped`], the rest still load.
//! Only file-level and document-level problems abort a load.

use std::fs;
use std::io::Write;
use std::path::Path;

use mediateca_core::{MediaFactory, RecordError};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::Catalog;

/// Name of the top-level array field.
pub const ROOT_FIELD: &str = "biblioteca";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Cannot read {path}: {source}")]
    FileNotFound {
        path: String,
        source: std::io::Error,
    },
    #[error("Cannot write {path}: {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// A document element that did not make it into the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the element in the document array.
    pub index: usize,
    pub error: RecordError,
}

/// Outcome of a load: the records that built, plus the ones that did not.
#[derive(Debug)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    /// True when every element of the document was loaded.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Build the document for `catalog`, keeping catalog order.
pub fn serialize(catalog: &Catalog) -> Value {
    let records: Vec<Value> = catalog
        .iter()
        .map(|r| Value::Object(r.to_field_map()))
        .collect();
    let mut root = serde_json::Map::new();
    root.insert(ROOT_FIELD.to_string(), Value::Array(records));
    Value::Object(root)
}

/// Pretty-printed document text for `catalog`.
pub fn to_string(catalog: &Catalog) -> String {
    format!("{:#}", serialize(catalog))
}

/// Write `catalog` to `path`, replacing any existing file.
pub fn serialize_to_file(catalog: &Catalog, path: &Path) -> Result<(), CodecError> {
    let text = to_string(catalog);
    let write_err = |source| CodecError::FileWrite {
        path: path.display().to_string(),
        source,
    };

    let mut file = fs::File::create(path).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    log::debug!(
        "Saved {} records to {}",
        catalog.size(),
        path.display()
    );
    Ok(())
}

/// Rebuild a catalog from a parsed document.
pub fn deserialize(document: &Value) -> Result<LoadReport, CodecError> {
    let root = document
        .as_object()
        .ok_or_else(|| CodecError::MalformedDocument("top level is not an object".into()))?;
    let elements = match root.get(ROOT_FIELD) {
        Some(Value::Array(elements)) => elements,
        Some(_) => {
            return Err(CodecError::MalformedDocument(format!(
                "field '{ROOT_FIELD}' is not an array"
            )));
        }
        None => {
            return Err(CodecError::MalformedDocument(format!(
                "missing field '{ROOT_FIELD}'"
            )));
        }
    };

    let mut catalog = Catalog::new();
    let mut skipped = Vec::new();

    for (index, element) in elements.iter().enumerate() {
        let built = match element {
            Value::Object(map) => MediaFactory::create_from_structured(map),
            _ => Err(RecordError::malformed("element is not an object")),
        };
        let outcome = built.and_then(|record| {
            catalog
                .add_record(record)
                .map_err(|e| RecordError::malformed(e.to_string()))
        });
        if let Err(error) = outcome {
            log::warn!("Skipping record {index}: {error}");
            skipped.push(SkippedRecord { index, error });
        }
    }

    if !skipped.is_empty() {
        log::info!(
            "Loaded {} of {} records ({} skipped)",
            catalog.size(),
            elements.len(),
            skipped.len()
        );
    }

    Ok(LoadReport { catalog, skipped })
}

/// Parse document text and rebuild the catalog it describes.
pub fn from_str(text: &str) -> Result<LoadReport, CodecError> {
    from_slice(text.as_bytes())
}

fn from_slice(bytes: &[u8]) -> Result<LoadReport, CodecError> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| CodecError::MalformedDocument(e.to_string()))?;
    deserialize(&document)
}

/// Read and rebuild the catalog stored at `path`.
pub fn deserialize_from_file(path: &Path) -> Result<LoadReport, CodecError> {
    let bytes = fs::read(path).map_err(|source| CodecError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;
    let report = from_slice(&bytes)?;
    log::debug!(
        "Loaded {} records from {}",
        report.catalog.size(),
        path.display()
    );
    Ok(report)
}

/// Replace the content of `catalog` with the records stored at `path`.
///
/// `catalog` is left untouched when the file or document is unusable.
pub fn load_into(catalog: &mut Catalog, path: &Path) -> Result<Vec<SkippedRecord>, CodecError> {
    let report = deserialize_from_file(path)?;
    catalog.replace_with(report.catalog);
    Ok(report.skipped)
}
