//! Recipe and ingredient value types
//!
//! Both types are plain owned values. A recipe is built fully formed,
//! serialized into the recipe document, and read back by value; nothing
//! shares mutable state with the store.
//!
//! ## Document record layout
//!
//! ```json
//! {
//!   "title": "Simple Pasta",
//!   "ingredients": [{ "name": "pasta", "amount": "8 oz" }],
//!   "instructions": "Boil pasta.",
//!   "calories": null
//! }
//! ```
//!
//! `ingredients`, `instructions`, and `calories` may be missing or `null` on
//! read. `calories` is written as `null` when unknown.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single ingredient line of a recipe
///
/// `amount` is free text ("2 cups", "pinch", "500g") and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, matched case-insensitively by queries
    pub name: String,
    /// Free-text quantity
    pub amount: String,
    /// Optional per-ingredient preparation note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Ingredient {
    /// Create an ingredient without a note
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            note: None,
        }
    }

    /// Attach a preparation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.name)
    }
}

/// A recipe record
///
/// The title identifies the recipe within a collection and is compared
/// case-insensitively (see [`Recipe::has_title`]). Ingredients keep their
/// insertion order and may repeat.
///
/// # Example
///
/// ```rust
/// use recipebook_core::{Ingredient, Recipe};
///
/// let recipe = Recipe::new("Simple Pasta")
///     .with_ingredient(Ingredient::new("pasta", "8 oz"))
///     .with_ingredient(Ingredient::new("garlic", "2 cloves"))
///     .with_instructions("Boil pasta, toss with garlic.");
///
/// assert_eq!(recipe.ingredient_count(), 2);
/// assert!(recipe.has_title("simple PASTA"));
/// assert!(recipe.calories.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Title, unique per collection by convention only
    pub title: String,
    /// Ingredients in insertion order
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    /// Free-text instructions
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    /// Calorie value, absent unless supplied from outside
    ///
    /// Must be finite when present. JSON has no encoding for infinity or
    /// NaN, so the file store refuses to write them (see
    /// [`Recipe::has_storable_calories`]).
    #[serde(default)]
    pub calories: Option<f64>,
}

/// Decode `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Recipe {
    /// Create a recipe with no ingredients, instructions, or calories
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
            calories: None,
        }
    }

    /// Append an ingredient
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Replace the ingredient list
    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        self.ingredients = ingredients.into_iter().collect();
        self
    }

    /// Set the instructions
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set the calorie value
    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// True when `calories` is absent or a finite number
    pub fn has_storable_calories(&self) -> bool {
        self.calories.map_or(true, f64::is_finite)
    }

    /// Number of ingredients
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Case-insensitive title comparison
    ///
    /// Every lookup, update, and delete in the system goes through this.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
