//! Book configuration via `recipebook.toml`
//!
//! The config names the recipe document and how to treat a document that
//! cannot be decoded. Every key is optional.

use recipebook_core::{Error, Result};
use recipebook_storage::{CorruptionPolicy, DEFAULT_DOCUMENT_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "recipebook.toml";

/// Book configuration loaded from `recipebook.toml`.
///
/// # Example
///
/// ```toml
/// storage_path = "recipes.json"
/// on_corrupt = "empty"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Path of the recipe document.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// `"empty"` (default) reads a malformed document as no recipes;
    /// `"fail"` reports it as an error.
    #[serde(default)]
    pub on_corrupt: CorruptionPolicy,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT_PATH)
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            on_corrupt: CorruptionPolicy::default(),
        }
    }
}

impl BookConfig {
    /// Config pointing at `storage_path` with default settings otherwise.
    pub fn with_storage_path(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
            ..Self::default()
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Recipe book configuration
#
# Path of the recipe document (a JSON array of recipes).
storage_path = "recipes.json"

# What to do when the document exists but cannot be decoded:
#   "empty" = treat it as an empty collection and log a warning (default)
#   "fail"  = report an error; the file is left untouched
on_corrupt = "empty"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text is not a valid config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
