//! JSON file store
//!
//! The whole collection lives in one pretty-printed JSON array. Every
//! mutation reads the array, changes it, and writes it back.
//!
//! ## Write path
//!
//! Writes go to a sibling `<name>.tmp` file, are fsynced, and then renamed
//! over the document. A failed write leaves the previous document intact.
//!
//! ## Read faults
//!
//! | Condition | Result |
//! |-----------|--------|
//! | document missing | empty collection |
//! | document malformed | governed by [`CorruptionPolicy`] |
//! | any other I/O error | `Error::Io` |
//!
//! A malformed document is never repaired in place.

use recipebook_core::{Error, Recipe, RecipeStore, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Document path used when none is configured
pub const DEFAULT_DOCUMENT_PATH: &str = "recipes.json";

/// What to do when the document exists but cannot be decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorruptionPolicy {
    /// Log a warning and read as an empty collection
    #[default]
    #[serde(rename = "empty")]
    TreatAsEmpty,
    /// Surface `Error::Corruption`
    #[serde(rename = "fail")]
    Fail,
}

/// Recipe store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    policy: CorruptionPolicy,
}

impl JsonFileStore {
    /// Open the document at `path`, creating an empty one if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the missing document cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(path, CorruptionPolicy::default())
    }

    /// Open with an explicit corruption policy
    ///
    /// # Errors
    ///
    /// Returns an error if the missing document cannot be created.
    pub fn open_with(path: impl Into<PathBuf>, policy: CorruptionPolicy) -> Result<Self> {
        let mut store = Self {
            path: path.into(),
            policy,
        };
        if !store.path.exists() {
            info!(target: "recipebook::storage", path = %store.path.display(), "Creating empty recipe document");
            store.write_all(&[])?;
        }
        Ok(store)
    }

    /// Document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Active corruption policy
    pub fn policy(&self) -> CorruptionPolicy {
        self.policy
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecipeStore for JsonFileStore {
    fn read_all(&self) -> Result<Vec<Recipe>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(target: "recipebook::storage", path = %self.path.display(), "Document missing, reading as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Recipe>>(&bytes) {
            Ok(recipes) => {
                debug!(target: "recipebook::storage", path = %self.path.display(), count = recipes.len(), "Read recipe document");
                Ok(recipes)
            }
            Err(e) => match self.policy {
                CorruptionPolicy::TreatAsEmpty => {
                    warn!(target: "recipebook::storage", path = %self.path.display(), error = %e, "Malformed recipe document, reading as empty");
                    Ok(Vec::new())
                }
                CorruptionPolicy::Fail => Err(Error::Corruption {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }),
            },
        }
    }

    fn write_all(&mut self, recipes: &[Recipe]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        if let Some(bad) = recipes.iter().find(|r| !r.has_storable_calories()) {
            return Err(Error::Serialization(format!(
                "recipe '{}' has non-finite calories",
                bad.title
            )));
        }
        let payload = serde_json::to_vec_pretty(recipes)?;

        // Atomic write: temp + fsync + rename
        let tmp_path = self.temp_path();
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&payload)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        debug!(target: "recipebook::storage", path = %self.path.display(), count = recipes.len(), "Wrote recipe document");
        Ok(())
    }
}
