//! Recipebook - a personal recipe collection backed by a single JSON document
//!
//! Recipes are kept in one file that is rewritten whole on every mutation.
//! The [`RecipeBook`] holds an in-memory view of that file and answers the
//! sort, filter, and search queries.
//!
//! # Quick Start
//!
//! ```no_run
//! use recipebook::{Ingredient, Recipe, RecipeBook, SortCriterion};
//!
//! let mut book = RecipeBook::open_path("recipes.json")?;
//!
//! book.add_recipe(
//!     Recipe::new("Scrambled Eggs")
//!         .with_ingredient(Ingredient::new("eggs", "3"))
//!         .with_ingredient(Ingredient::new("butter", "1 tbsp")),
//! )?;
//!
//! let by_title = book.sort_recipes(SortCriterion::Alphabetical, false);
//! # Ok::<(), recipebook::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `recipebook-core`: data model, error type, and the `RecipeStore` trait
//! - `recipebook-storage`: JSON file and in-memory stores
//! - `recipebook-engine`: the book, its queries, and `recipebook.toml` config

pub use recipebook_engine::*;
