//! RecipeBook: the queryable recipe collection
//!
//! ## Design: CACHE OVER A WHOLE-DOCUMENT STORE
//!
//! The book owns a store and an in-memory copy of the collection. Queries
//! run against the copy; lookups and mutations go to the store.
//!
//! ## Refresh points
//!
//! | Operation | Store | Cache |
//! |-----------|-------|-------|
//! | `new` / `open` | read | loaded |
//! | `add_recipe` | append | appended in place, no reload |
//! | `update_recipe` | replace first match | reloaded if a recipe matched |
//! | `delete_recipe` | remove all matches | reloaded if a recipe matched |
//! | `clear` | write empty | emptied |
//! | `get_recipe` | read | untouched |
//!
//! Because `add_recipe` does not reload, changes another writer made to
//! the document are not picked up until the next successful update,
//! delete, or explicit `reload`. Callers rely on this; keep it.
//!
//! ## Duplicate titles
//!
//! Adding never checks for an existing title. Lookups and updates act on
//! the first case-insensitive match; deletes remove every match.

use crate::config::BookConfig;
use crate::query::{self, IngredientFilter, SortCriterion};
use recipebook_core::{Recipe, RecipeStore, Result};
use recipebook_storage::{JsonFileStore, MemoryStore};
use std::path::PathBuf;
use tracing::debug;

/// A recipe collection backed by a [`RecipeStore`]
///
/// # Example
///
/// ```rust
/// use recipebook_core::Recipe;
/// use recipebook_engine::{RecipeBook, SortCriterion};
///
/// let mut book = RecipeBook::ephemeral();
/// book.add_recipe(Recipe::new("Soup").with_calories(180.0))?;
/// book.add_recipe(Recipe::new("Salad").with_calories(90.0))?;
///
/// let lightest = book.sort_recipes(SortCriterion::Calories, false);
/// assert_eq!(lightest[0].title, "Salad");
///
/// assert!(book.delete_recipe("SOUP")?);
/// assert_eq!(book.len(), 1);
/// # Ok::<(), recipebook_core::Error>(())
/// ```
#[derive(Debug)]
pub struct RecipeBook<S: RecipeStore = JsonFileStore> {
    store: S,
    recipes: Vec<Recipe>,
}

impl RecipeBook<JsonFileStore> {
    /// Open the JSON document named by `config`
    ///
    /// Creates an empty document if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be created or read.
    pub fn open(config: &BookConfig) -> Result<Self> {
        let store = JsonFileStore::open_with(config.storage_path.clone(), config.on_corrupt)?;
        Self::new(store)
    }

    /// Open the JSON document at `path` with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be created or read.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(&BookConfig::with_storage_path(path))
    }
}

impl RecipeBook<MemoryStore> {
    /// Book over an empty in-memory store; nothing touches disk
    pub fn ephemeral() -> Self {
        Self {
            store: MemoryStore::new(),
            recipes: Vec::new(),
        }
    }
}

impl<S: RecipeStore> RecipeBook<S> {
    /// Create a book over `store`, loading the collection once
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn new(store: S) -> Result<Self> {
        let recipes = store.read_all()?;
        debug!(target: "recipebook::book", count = recipes.len(), "Loaded recipe book");
        Ok(Self { store, recipes })
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read the cache from the store
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read; the cache is left as it was.
    pub fn reload(&mut self) -> Result<()> {
        self.recipes = self.store.read_all()?;
        debug!(target: "recipebook::book", count = self.recipes.len(), "Reloaded recipe book");
        Ok(())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Persist `recipe` and append it to the cache
    ///
    /// Does not reload from the store and does not check for an existing
    /// title.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written; the cache
    /// is unchanged in that case.
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        self.store.add(&recipe)?;
        debug!(target: "recipebook::book", title = %recipe.title, "Added recipe");
        self.recipes.push(recipe);
        Ok(())
    }

    /// Replace the first recipe titled `old_title` (case-insensitive)
    ///
    /// Returns `false` when no recipe matches. On success the cache is
    /// reloaded from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn update_recipe(&mut self, old_title: &str, recipe: Recipe) -> Result<bool> {
        let updated = self.store.update(old_title, &recipe)?;
        if updated {
            debug!(target: "recipebook::book", old_title, title = %recipe.title, "Updated recipe");
            self.reload()?;
        }
        Ok(updated)
    }

    /// Remove every recipe titled `title` (case-insensitive)
    ///
    /// Returns `false` when no recipe matches. On success the cache is
    /// reloaded from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn delete_recipe(&mut self, title: &str) -> Result<bool> {
        let deleted = self.store.delete(title)?;
        if deleted {
            debug!(target: "recipebook::book", title, "Deleted recipe");
            self.reload()?;
        }
        Ok(deleted)
    }

    /// Remove every recipe from the store and the cache
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear_all()?;
        self.recipes.clear();
        debug!(target: "recipebook::book", "Cleared recipe book");
        Ok(())
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// First recipe titled `title` (case-insensitive), read from the store
    ///
    /// Bypasses the cache, so it reflects the latest persisted document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn get_recipe(&self, title: &str) -> Result<Option<Recipe>> {
        self.store.get_by_title(title)
    }

    /// Copy of every cached recipe, in collection order
    pub fn get_all_recipes(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    /// Borrowed view of the cache
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of cached recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the cache holds no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    // ========================================================================
    // Queries (cache only)
    // ========================================================================

    /// Sorted copy of the cache; see [`SortCriterion::compare`]
    pub fn sort_recipes(&self, criterion: SortCriterion, reverse: bool) -> Vec<Recipe> {
        query::sort_recipes(&self.recipes, criterion, reverse)
    }

    /// Cached recipes passing `filter`, in collection order
    pub fn filter_by_ingredients(&self, filter: &IngredientFilter) -> Vec<Recipe> {
        query::filter_recipes(&self.recipes, filter)
    }

    /// Cached recipes whose title or an ingredient name contains `query`
    pub fn search_recipes(&self, query: &str) -> Vec<Recipe> {
        query::search_recipes(&self.recipes, query)
    }
}
