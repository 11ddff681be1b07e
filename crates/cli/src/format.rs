//! Recipe → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): a framed block per recipe
//! - **JSON** (`--json`): the document records, `serde_json::to_string_pretty`

use recipebook_engine::{Error, Recipe};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

const RULE_WIDTH: usize = 60;

/// Format a single recipe.
pub fn format_recipe(recipe: &Recipe, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(recipe),
        OutputMode::Human => format_recipe_human(recipe),
    }
}

/// Format a result list; `empty_message` is shown in human mode when
/// there is nothing to list.
pub fn format_recipes(recipes: &[Recipe], mode: OutputMode, empty_message: &str) -> String {
    match mode {
        OutputMode::Json => to_json(recipes),
        OutputMode::Human if recipes.is_empty() => empty_message.to_string(),
        OutputMode::Human => {
            let mut out = format!("Found {} recipe(s):\n", recipes.len());
            for recipe in recipes {
                out.push('\n');
                out.push_str(&format_recipe_human(recipe));
            }
            out
        }
    }
}

/// Format a status line (confirmation or not-found).
pub fn format_message(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&serde_json::json!({ "message": message })),
        OutputMode::Human => message.to_string(),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&serde_json::json!({ "error": err.to_string() })),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_recipe_human(recipe: &Recipe) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![rule.clone(), format!("Recipe: {}", recipe.title), rule];

    if let Some(calories) = recipe.calories {
        lines.push(format!("Calories: {:.0}", calories));
    }

    lines.push(String::new());
    lines.push(format!("Ingredients ({}):", recipe.ingredient_count()));
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        match &ingredient.note {
            Some(note) => lines.push(format!("  {}. {} ({})", i + 1, ingredient, note)),
            None => lines.push(format!("  {}. {}", i + 1, ingredient)),
        }
    }

    if !recipe.instructions.is_empty() {
        lines.push(String::new());
        lines.push("Instructions:".to_string());
        lines.push(recipe.instructions.clone());
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook_engine::Ingredient;

    fn pancakes() -> Recipe {
        Recipe::new("Pancakes")
            .with_ingredient(Ingredient::new("flour", "2 cups"))
            .with_ingredient(Ingredient::new("eggs", "2").with_note("beaten"))
            .with_instructions("Mix and fry.")
            .with_calories(349.6)
    }

    #[test]
    fn test_format_recipe_human() {
        let text = format_recipe(&pancakes(), OutputMode::Human);
        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("Recipe: Pancakes"));
        assert!(text.contains("Calories: 350"));
        assert!(text.contains("Ingredients (2):"));
        assert!(text.contains("  1. 2 cups flour"));
        assert!(text.contains("  2. 2 eggs (beaten)"));
        assert!(text.contains("Instructions:\nMix and fry."));
    }

    #[test]
    fn test_format_recipe_human_without_optional_parts() {
        let text = format_recipe(&Recipe::new("Water"), OutputMode::Human);
        assert!(!text.contains("Calories"));
        assert!(!text.contains("Instructions"));
        assert!(text.contains("Ingredients (0):"));
    }

    #[test]
    fn test_format_recipes_empty() {
        assert_eq!(
            format_recipes(&[], OutputMode::Human, "No recipes found."),
            "No recipes found."
        );
        assert_eq!(format_recipes(&[], OutputMode::Json, "ignored"), "[]");
    }

    #[test]
    fn test_format_recipes_json_is_document_layout() {
        let text = format_recipes(&[pancakes()], OutputMode::Json, "");
        let parsed: Vec<Recipe> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![pancakes()]);
    }

    #[test]
    fn test_format_recipes_human_count() {
        let text = format_recipes(&[pancakes(), Recipe::new("Toast")], OutputMode::Human, "");
        assert!(text.starts_with("Found 2 recipe(s):"));
    }

    #[test]
    fn test_format_error() {
        let err = Error::Config("bad".to_string());
        assert_eq!(format_error(&err, OutputMode::Human), "(error) Configuration error: bad");
        assert!(format_error(&err, OutputMode::Json).contains("\"error\""));
    }
}
