//! Recipe book engine
//!
//! The engine ties a [`RecipeStore`] to an in-memory cache and answers
//! queries over it:
//! - [`RecipeBook`]: add/get/update/delete plus sort, filter, and search
//! - [`query`]: the sort, filter, and search rules themselves
//! - [`BookConfig`]: `recipebook.toml` loading
//!
//! The book is single-threaded and assumes it is the only writer of its
//! document.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod config;
pub mod query;

pub use book::RecipeBook;
pub use config::{BookConfig, CONFIG_FILE_NAME};
pub use query::{IngredientFilter, SortCriterion, UnknownCriterion};

// Re-export the data model and stores so callers need only this crate
pub use recipebook_core::{Error, Ingredient, Recipe, RecipeStore, Result};
pub use recipebook_storage::{CorruptionPolicy, JsonFileStore, MemoryStore, DEFAULT_DOCUMENT_PATH};
