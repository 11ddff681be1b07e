//! Storage trait for the recipe document
//!
//! A store persists the whole collection as one document. Implementations
//! supply `read_all` and `write_all`; every other operation is a
//! read-modify-write built on those two and is provided here once.
//!
//! Stores assume a single writer. Two handles on the same document race
//! with last-write-wins semantics and no locking.

use crate::error::Result;
use crate::recipe::Recipe;

/// Whole-document recipe storage
///
/// # Examples
///
/// ```
/// use recipebook_core::{Recipe, RecipeStore, Result};
///
/// #[derive(Default)]
/// struct VecStore(Vec<Recipe>);
///
/// impl RecipeStore for VecStore {
///     fn read_all(&self) -> Result<Vec<Recipe>> {
///         Ok(self.0.clone())
///     }
///     fn write_all(&mut self, recipes: &[Recipe]) -> Result<()> {
///         self.0 = recipes.to_vec();
///         Ok(())
///     }
/// }
///
/// let mut store = VecStore::default();
/// store.add(&Recipe::new("Pasta")).unwrap();
/// assert!(store.delete("PASTA").unwrap());
/// ```
pub trait RecipeStore {
    /// Read the full collection in document order
    ///
    /// A missing document reads as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, or if it is
    /// malformed and the store is configured to report corruption.
    fn read_all(&self) -> Result<Vec<Recipe>>;

    /// Replace the full collection
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written. The previously
    /// persisted document is left intact.
    fn write_all(&mut self, recipes: &[Recipe]) -> Result<()>;

    /// Append a recipe to the document
    ///
    /// No uniqueness check: a title that already exists is appended again.
    ///
    /// # Errors
    ///
    /// Propagates read and write faults.
    fn add(&mut self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.read_all()?;
        recipes.push(recipe.clone());
        self.write_all(&recipes)
    }

    /// First recipe whose title matches case-insensitively
    ///
    /// # Errors
    ///
    /// Propagates read faults.
    fn get_by_title(&self, title: &str) -> Result<Option<Recipe>> {
        Ok(self.read_all()?.into_iter().find(|r| r.has_title(title)))
    }

    /// Replace the first recipe whose title matches `old_title`
    ///
    /// The replacement keeps the original position. Returns `false` and
    /// writes nothing when no recipe matches.
    ///
    /// # Errors
    ///
    /// Propagates read and write faults.
    fn update(&mut self, old_title: &str, recipe: &Recipe) -> Result<bool> {
        let mut recipes = self.read_all()?;
        match recipes.iter_mut().find(|r| r.has_title(old_title)) {
            Some(slot) => {
                *slot = recipe.clone();
                self.write_all(&recipes)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every recipe whose title matches
    ///
    /// Writes only when something was removed.
    ///
    /// # Errors
    ///
    /// Propagates read and write faults.
    fn delete(&mut self, title: &str) -> Result<bool> {
        let mut recipes = self.read_all()?;
        let before = recipes.len();
        recipes.retain(|r| !r.has_title(title));
        if recipes.len() == before {
            return Ok(false);
        }
        self.write_all(&recipes)?;
        Ok(true)
    }

    /// Write an empty collection
    ///
    /// # Errors
    ///
    /// Propagates write faults.
    fn clear_all(&mut self) -> Result<()> {
        self.write_all(&[])
    }
}
