//! Sort, filter, and search over a recipe slice
//!
//! All three are total: they never fail and never touch storage. Results
//! are fresh vectors; the input slice is not reordered.
//!
//! ## Ordering rules
//!
//! - Sorting is stable. Recipes with equal keys keep their input order,
//!   in both directions.
//! - Filtering and searching preserve input order.

use recipebook_core::Recipe;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Sort
// ============================================================================

/// Fixed sort modes for a recipe listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Title, case-insensitive
    Alphabetical,
    /// Number of ingredients
    IngredientCount,
    /// Calorie value; recipes without one always sort last
    Calories,
}

impl SortCriterion {
    /// Every criterion, in display order
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Alphabetical,
        SortCriterion::IngredientCount,
        SortCriterion::Calories,
    ];

    /// Stable name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Alphabetical => "alphabetical",
            SortCriterion::IngredientCount => "ingredient_count",
            SortCriterion::Calories => "calories",
        }
    }

    /// Compare two recipes under this criterion
    ///
    /// `reverse` flips the key order. For `Calories` it does not move
    /// recipes without a value: they compare greater than any value in
    /// either direction.
    pub fn compare(&self, a: &Recipe, b: &Recipe, reverse: bool) -> Ordering {
        let directed = |ord: Ordering| if reverse { ord.reverse() } else { ord };
        match self {
            SortCriterion::Alphabetical => {
                directed(a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            }
            SortCriterion::IngredientCount => {
                directed(a.ingredient_count().cmp(&b.ingredient_count()))
            }
            SortCriterion::Calories => match (a.calories, b.calories) {
                // + 0.0 folds -0.0 into 0.0 so signed zeros tie
                (Some(x), Some(y)) => directed((x + 0.0).total_cmp(&(y + 0.0))),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized sort criterion name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort criterion '{0}' (expected alphabetical, ingredient_count, or calories)")]
pub struct UnknownCriterion(pub String);

impl FromStr for SortCriterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriterion::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCriterion(s.to_string()))
    }
}

/// Stable sort of a copy of `recipes`
pub fn sort_recipes(recipes: &[Recipe], criterion: SortCriterion, reverse: bool) -> Vec<Recipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by(|a, b| criterion.compare(a, b, reverse));
    sorted
}

// ============================================================================
// Filter
// ============================================================================

/// Included/excluded ingredient constraint
///
/// Names match as case-insensitive substrings of ingredient names, so
/// `"egg"` matches `"Eggs"`. An empty side places no constraint.
///
/// # Example
///
/// ```rust
/// use recipebook_core::{Ingredient, Recipe};
/// use recipebook_engine::IngredientFilter;
///
/// let omelette = Recipe::new("Omelette")
///     .with_ingredient(Ingredient::new("eggs", "3"))
///     .with_ingredient(Ingredient::new("butter", "1 tbsp"));
///
/// assert!(IngredientFilter::new().include("egg").matches(&omelette));
/// assert!(!IngredientFilter::new().include("egg").exclude("BUTTER").matches(&omelette));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientFilter {
    /// Every name here must match at least one ingredient
    pub included: Vec<String>,
    /// No name here may match any ingredient
    pub excluded: Vec<String>,
}

impl IngredientFilter {
    /// Filter with no constraints; matches every recipe
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an ingredient containing `name`
    pub fn include(mut self, name: impl Into<String>) -> Self {
        self.included.push(name.into());
        self
    }

    /// Reject recipes with an ingredient containing `name`
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }

    /// True when neither side constrains anything
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// Test a recipe against both sides
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let names: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .collect();
        let present = |needle: &String| {
            let needle = needle.to_lowercase();
            names.iter().any(|name| name.contains(&needle))
        };

        self.included.iter().all(present) && !self.excluded.iter().any(present)
    }
}

/// Recipes passing `filter`, in input order
pub fn filter_recipes(recipes: &[Recipe], filter: &IngredientFilter) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

// ============================================================================
// Search
// ============================================================================

/// True when `query` is a case-insensitive substring of the title or of
/// any ingredient name
pub fn recipe_matches_query(recipe: &Recipe, query: &str) -> bool {
    let query = query.to_lowercase();
    recipe.title.to_lowercase().contains(&query)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.name.to_lowercase().contains(&query))
}

/// Recipes matching `query`, in input order, each at most once
pub fn search_recipes(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| recipe_matches_query(r, query))
        .cloned()
        .collect()
}
