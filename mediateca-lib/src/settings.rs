//! Shared application settings (library file location).
//!
//! Every frontend reads the same `~/.config/mediateca/settings.toml`, so
//! library-path resolution is consistent everywhere.
//!
//! ```toml
//! [library]
//! current_file = "/home/me/library.json"
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the shared settings file: `~/.config/mediateca/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mediateca").join("settings.toml")
}

/// Where the last session is kept when no library file was chosen.
pub fn default_session_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("mediateca").join("last_session.json")
}

/// Resolve the library file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.current_file` in `settings.toml`
/// 3. [`default_session_path`]
pub fn resolve_library_path(cli_override: Option<PathBuf>) -> PathBuf {
    SettingsFile::default_location().resolve_library_path(cli_override)
}

/// Save (or clear) the library file in `settings.toml`.
pub fn save_library_path(path: Option<&Path>) -> io::Result<()> {
    SettingsFile::default_location().save_library_path(path)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    SettingsFile::default_location().load_string()
}

/// A settings file at a specific location.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::at(settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resolve_library_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        if let Some(p) = cli_override {
            return p;
        }
        if let Some(p) = self.library_path() {
            return p;
        }
        default_session_path()
    }

    /// Read `library.current_file`, if set.
    pub fn library_path(&self) -> Option<PathBuf> {
        let doc = self.load()?;
        let file = doc.get("library")?.get("current_file")?.as_str()?;
        if file.is_empty() {
            None
        } else {
            Some(PathBuf::from(file))
        }
    }

    pub fn save_library_path(&self, path: Option<&Path>) -> io::Result<()> {
        self.update_library(|table| match path {
            Some(p) => {
                table.insert(
                    "current_file".to_string(),
                    toml::Value::String(p.to_string_lossy().into_owned()),
                );
            }
            None => {
                table.remove("current_file");
            }
        })
    }

    pub fn load_string(&self) -> Option<String> {
        toml::to_string_pretty(&self.load()?).ok()
    }

    fn load(&self) -> Option<toml::Value> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        contents.parse().ok()
    }

    /// Apply `edit` to the `[library]` table, preserving every other key.
    fn update_library<F>(&self, edit: F) -> io::Result<()>
    where
        F: FnOnce(&mut toml::Table),
    {
        let mut doc = self
            .load()
            .unwrap_or_else(|| toml::Value::Table(Default::default()));

        let table = doc
            .as_table_mut()
            .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
        let library = table
            .entry("library")
            .or_insert_with(|| toml::Value::Table(Default::default()));
        let lib_table = library
            .as_table_mut()
            .ok_or_else(|| io::Error::other("[library] is not a table"))?;
        edit(lib_table);

        // Write atomically
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, &self.path)?;

        log::debug!("Updated settings at {}", self.path.display());
        Ok(())
    }
}
