//! Session persistence: what the shell opens at startup and saves on exit.

use std::path::{Path, PathBuf};

use mediateca_catalog::json::{self, CodecError, LoadReport};
use mediateca_catalog::Catalog;
use thiserror::Error;

/// Library shipped with the application, used when no session exists yet.
const SAMPLE_LIBRARY: &str = include_str!("../data/sample_library.json");

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Cannot prepare {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Where a startup catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSource {
    /// Restored from an existing library file.
    Restored(PathBuf),
    /// No file yet; the bundled sample library was loaded.
    Sample,
}

/// A catalog ready for the shell, plus its provenance.
#[derive(Debug)]
pub struct Session {
    pub source: SessionSource,
    pub report: LoadReport,
}

/// The bundled sample library.
pub fn sample_library() -> Result<LoadReport, CodecError> {
    json::from_str(SAMPLE_LIBRARY)
}

/// Open the library at `path`, or the sample library when it does not exist.
///
/// An existing but unreadable or malformed file is an error, never silently
/// replaced by the sample.
pub fn open_session(path: &Path) -> Result<Session, SessionError> {
    if path.exists() {
        let report = json::deserialize_from_file(path)?;
        log::info!(
            "Restored {} records from {}",
            report.catalog.size(),
            path.display()
        );
        Ok(Session {
            source: SessionSource::Restored(path.to_path_buf()),
            report,
        })
    } else {
        log::debug!("No library at {}, loading sample", path.display());
        Ok(Session {
            source: SessionSource::Sample,
            report: sample_library()?,
        })
    }
}

/// Write `catalog` to `path`, creating parent directories as needed.
///
/// The file is replaced atomically through a temporary sibling.
pub fn save_session(catalog: &Catalog, path: &Path) -> Result<(), SessionError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SessionError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let tmp = path.with_extension("json.tmp");
    json::serialize_to_file(catalog, &tmp)?;
    std::fs::rename(&tmp, path).map_err(|source| SessionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
