//! In-memory recipe store
//!
//! Holds the document as an owned vector. Nothing touches disk; used for
//! ephemeral books and for tests that do not care about the file format.

use recipebook_core::{Recipe, RecipeStore, Result};
use tracing::trace;

/// Recipe store that keeps the document in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    recipes: Vec<Recipe>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `recipes`
    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().collect(),
        }
    }
}

impl RecipeStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn write_all(&mut self, recipes: &[Recipe]) -> Result<()> {
        trace!(target: "recipebook::storage", count = recipes.len(), "Replaced in-memory document");
        self.recipes = recipes.to_vec();
        Ok(())
    }
}
