//! RecipeBook tests against an on-disk document
//!
//! Covers the cache refresh points (add appends without reloading,
//! update/delete reload), lookups that bypass the cache, and opening a book
//! from `recipebook.toml`.

use recipebook_engine::{
    BookConfig, CorruptionPolicy, Error, Ingredient, IngredientFilter, JsonFileStore, Recipe,
    RecipeBook, RecipeStore, SortCriterion,
};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn document_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("recipes.json")
}

fn titles(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}

fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Chocolate Chip Cookies")
            .with_ingredient(Ingredient::new("flour", "2 cups"))
            .with_ingredient(Ingredient::new("sugar", "1 cup"))
            .with_ingredient(Ingredient::new("butter", "1/2 cup"))
            .with_ingredient(Ingredient::new("chocolate chips", "1 cup"))
            .with_ingredient(Ingredient::new("eggs", "2"))
            .with_ingredient(Ingredient::new("vanilla extract", "1 tsp")),
        Recipe::new("Simple Pasta")
            .with_ingredient(Ingredient::new("pasta", "8 oz"))
            .with_ingredient(Ingredient::new("olive oil", "2 tbsp"))
            .with_ingredient(Ingredient::new("garlic", "2 cloves"))
            .with_ingredient(Ingredient::new("salt", "1 tsp"))
            .with_calories(520.0),
        Recipe::new("Scrambled Eggs")
            .with_ingredient(Ingredient::new("eggs", "3"))
            .with_ingredient(Ingredient::new("butter", "1 tbsp"))
            .with_ingredient(Ingredient::new("salt", "pinch"))
            .with_calories(310.0),
        Recipe::new("Pie").with_ingredient(Ingredient::new("chocolate chips", "1 cup")),
    ]
}

fn populated_book(dir: &TempDir) -> RecipeBook {
    let mut book = RecipeBook::open_path(document_path(dir)).unwrap();
    for recipe in sample_recipes() {
        book.add_recipe(recipe).unwrap();
    }
    book
}

// ============================================================================
// Refresh Points
// ============================================================================

#[test]
fn test_add_does_not_pick_up_external_changes() {
    let dir = TempDir::new().unwrap();
    let mut book = RecipeBook::open_path(document_path(&dir)).unwrap();

    let mut other = JsonFileStore::open(document_path(&dir)).unwrap();
    other.add(&Recipe::new("External")).unwrap();

    book.add_recipe(Recipe::new("Mine")).unwrap();

    // The cache only gained what this book added
    assert_eq!(titles(book.recipes()), vec!["Mine"]);
    // The document holds both
    let stored = other.read_all().unwrap();
    assert_eq!(titles(&stored), vec!["External", "Mine"]);
}

#[test]
fn test_update_reloads_external_changes() {
    let dir = TempDir::new().unwrap();
    let mut book = RecipeBook::open_path(document_path(&dir)).unwrap();
    book.add_recipe(Recipe::new("Mine")).unwrap();

    let mut other = JsonFileStore::open(document_path(&dir)).unwrap();
    other.add(&Recipe::new("External")).unwrap();

    assert!(book.update_recipe("mine", Recipe::new("Still Mine")).unwrap());
    assert_eq!(titles(book.recipes()), vec!["Still Mine", "External"]);
}

#[test]
fn test_failed_delete_does_not_reload() {
    let dir = TempDir::new().unwrap();
    let mut book = RecipeBook::open_path(document_path(&dir)).unwrap();

    let mut other = JsonFileStore::open(document_path(&dir)).unwrap();
    other.add(&Recipe::new("External")).unwrap();

    assert!(!book.delete_recipe("Nothing").unwrap());
    assert!(book.is_empty());

    book.reload().unwrap();
    assert_eq!(titles(book.recipes()), vec!["External"]);
}

#[test]
fn test_get_recipe_reads_store_not_cache() {
    let dir = TempDir::new().unwrap();
    let book = RecipeBook::open_path(document_path(&dir)).unwrap();

    let mut other = JsonFileStore::open(document_path(&dir)).unwrap();
    other.add(&Recipe::new("External")).unwrap();

    assert!(book.is_empty());
    assert!(book.get_recipe("EXTERNAL").unwrap().is_some());
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_reopen_sees_all_mutations() {
    let dir = TempDir::new().unwrap();
    {
        let mut book = populated_book(&dir);
        assert!(book.delete_recipe("PIE").unwrap());
        let updated = Recipe::new("Garlic Pasta")
            .with_ingredient(Ingredient::new("pasta", "8 oz"))
            .with_ingredient(Ingredient::new("garlic", "4 cloves").with_note("sliced thin"));
        assert!(book.update_recipe("simple pasta", updated).unwrap());
    }

    let book = RecipeBook::open_path(document_path(&dir)).unwrap();
    assert_eq!(
        titles(book.recipes()),
        vec!["Chocolate Chip Cookies", "Garlic Pasta", "Scrambled Eggs"]
    );
    let pasta = book.get_recipe("garlic pasta").unwrap().unwrap();
    assert_eq!(pasta.ingredients[1].note.as_deref(), Some("sliced thin"));
    assert_eq!(pasta.calories, None);
}

#[test]
fn test_round_trip_through_document() {
    let dir = TempDir::new().unwrap();
    let recipe = Recipe::new("Crème Brûlée")
        .with_ingredient(Ingredient::new("cream", "2 cups"))
        .with_instructions("1. Heat cream\n2. Torch sugar")
        .with_calories(412.75);

    let mut book = RecipeBook::open_path(document_path(&dir)).unwrap();
    book.add_recipe(recipe.clone()).unwrap();

    let reopened = RecipeBook::open_path(document_path(&dir)).unwrap();
    assert_eq!(reopened.get_all_recipes(), vec![recipe]);
}

#[test]
fn test_clear_empties_document() {
    let dir = TempDir::new().unwrap();
    let mut book = populated_book(&dir);
    book.clear().unwrap();

    assert!(book.is_empty());
    assert_eq!(fs::read_to_string(document_path(&dir)).unwrap(), "[]");
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_queries_over_populated_book() {
    let dir = TempDir::new().unwrap();
    let book = populated_book(&dir);

    let by_calories = book.sort_recipes(SortCriterion::Calories, true);
    assert_eq!(
        titles(&by_calories),
        vec!["Simple Pasta", "Scrambled Eggs", "Chocolate Chip Cookies", "Pie"]
    );

    let by_count = book.sort_recipes(SortCriterion::IngredientCount, true);
    assert_eq!(by_count[0].title, "Chocolate Chip Cookies");

    let no_butter = book.filter_by_ingredients(&IngredientFilter::new().include("egg").exclude("butter"));
    assert!(no_butter.is_empty());

    let eggs = book.filter_by_ingredients(&IngredientFilter::new().include("EGG"));
    assert_eq!(titles(&eggs), vec!["Chocolate Chip Cookies", "Scrambled Eggs"]);

    let choc = book.search_recipes("choc");
    assert_eq!(titles(&choc), vec!["Chocolate Chip Cookies", "Pie"]);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_open_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("recipebook.toml");
    let storage = dir.path().join("kitchen").join("book.json");
    BookConfig::with_storage_path(&storage)
        .write_to_file(&config_path)
        .unwrap();

    let config = BookConfig::from_file(&config_path).unwrap();
    let mut book = RecipeBook::open(&config).unwrap();
    book.add_recipe(Recipe::new("Toast")).unwrap();

    assert!(storage.exists());
    assert_eq!(book.store().path(), storage.as_path());
}

#[test]
fn test_fail_policy_rejects_corrupt_document_on_open() {
    let dir = TempDir::new().unwrap();
    fs::write(document_path(&dir), "not json at all").unwrap();

    let config = BookConfig {
        storage_path: document_path(&dir),
        on_corrupt: CorruptionPolicy::Fail,
    };
    assert!(matches!(RecipeBook::open(&config), Err(Error::Corruption { .. })));
}

#[test]
fn test_default_policy_opens_corrupt_document_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(document_path(&dir), "not json at all").unwrap();

    let book = RecipeBook::open_path(document_path(&dir)).unwrap();
    assert!(book.is_empty());
    assert_eq!(
        fs::read_to_string(document_path(&dir)).unwrap(),
        "not json at all"
    );
}
