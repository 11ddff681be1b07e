//! ArgMatches → CliAction conversion.
//!
//! Free-text ingredient entries are split into amount and name here, before
//! any value reaches the book.

use clap::ArgMatches;
use recipebook_engine::{Ingredient, IngredientFilter, Recipe, SortCriterion};

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Add { recipe: Recipe, replace: bool },
    Update { old_title: String, changes: RecipeChanges },
    Show { title: String },
    List { sort: Option<(SortCriterion, bool)> },
    Filter(IngredientFilter),
    Search { query: String },
    Delete { title: String },
    Clear,
}

/// Field edits requested by `update`; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeChanges {
    pub title: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<String>,
    pub calories: Option<Option<f64>>,
}

impl RecipeChanges {
    /// Apply the edits to `recipe`.
    pub fn apply(self, mut recipe: Recipe) -> Recipe {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
        if let Some(calories) = self.calories {
            recipe.calories = calories;
        }
        recipe
    }
}

/// Split `"2 cups flour"` at the last space into amount `"2 cups"` and
/// name `"flour"`. A single word becomes an ingredient with amount `"1"`.
pub fn parse_ingredient(text: &str) -> Option<Ingredient> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(match text.rsplit_once(' ') {
        Some((amount, name)) => Ingredient::new(name.trim(), amount.trim()),
        None => Ingredient::new(text, "1"),
    })
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "add" => {
            let title = required_string(sub_matches, "title")?;
            let mut recipe = Recipe::new(title).with_ingredients(ingredients(sub_matches));
            if let Some(instructions) = sub_matches.get_one::<String>("instructions") {
                recipe.instructions = instructions.clone();
            }
            recipe.calories = sub_matches.get_one::<f64>("calories").copied();
            Ok(CliAction::Add {
                recipe,
                replace: sub_matches.get_flag("replace"),
            })
        }
        "update" => {
            let old_title = required_string(sub_matches, "old-title")?;
            let calories = if sub_matches.get_flag("clear-calories") {
                Some(None)
            } else {
                sub_matches.get_one::<f64>("calories").map(|c| Some(*c))
            };
            let changes = RecipeChanges {
                title: sub_matches.get_one::<String>("title").cloned(),
                ingredients: sub_matches
                    .contains_id("ingredient")
                    .then(|| ingredients(sub_matches)),
                instructions: sub_matches.get_one::<String>("instructions").cloned(),
                calories,
            };
            Ok(CliAction::Update { old_title, changes })
        }
        "show" => Ok(CliAction::Show {
            title: required_string(sub_matches, "title")?,
        }),
        "list" => {
            let sort = match sub_matches.get_one::<String>("sort") {
                Some(name) => {
                    let criterion = name.parse::<SortCriterion>().map_err(|e| e.to_string())?;
                    Some((criterion, sub_matches.get_flag("reverse")))
                }
                None => None,
            };
            Ok(CliAction::List { sort })
        }
        "filter" => Ok(CliAction::Filter(IngredientFilter {
            included: names(sub_matches, "include"),
            excluded: names(sub_matches, "exclude"),
        })),
        "search" => Ok(CliAction::Search {
            query: required_string(sub_matches, "query")?,
        }),
        "delete" => Ok(CliAction::Delete {
            title: required_string(sub_matches, "title")?,
        }),
        "clear" => Ok(CliAction::Clear),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required_string(matches: &ArgMatches, id: &str) -> Result<String, String> {
    matches
        .get_one::<String>(id)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| format!("Missing argument: {}", id))
}

fn ingredients(matches: &ArgMatches) -> Vec<Ingredient> {
    matches
        .get_many::<String>("ingredient")
        .into_iter()
        .flatten()
        .filter_map(|text| parse_ingredient(text))
        .collect()
}

/// Trimmed, non-empty names from a comma-delimited list argument.
fn names(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
