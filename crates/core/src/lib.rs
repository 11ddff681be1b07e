//! Core types and traits for the recipe book
//!
//! This crate defines the foundational types used throughout the system:
//! - Ingredient, Recipe: the value records kept in the recipe document
//! - Error: error type hierarchy
//! - RecipeStore: whole-document storage trait with provided
//!   read-modify-write operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod recipe;
pub mod traits;

pub use error::{Error, Result};
pub use recipe::{Ingredient, Recipe};
pub use traits::RecipeStore;
