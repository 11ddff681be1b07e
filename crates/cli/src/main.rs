//! Recipebook CLI: a non-interactive front end for the recipe book.
//!
//! Every invocation opens the book, runs one command, and exits:
//! `recipebook [--config FILE] [--data FILE] [--json] <command>`
//!
//! Exit status is 0 on success, 1 when the named recipe does not exist or
//! the book reports an error, and 2 for usage errors.

mod commands;
mod format;
mod parse;

use std::path::{Path, PathBuf};
use std::process;

use clap::ArgMatches;
use recipebook_engine::{BookConfig, RecipeBook, Result, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_message, format_recipe, format_recipes, OutputMode};
use parse::{matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();
    let Some((_, sub_matches)) = matches.subcommand() else {
        process::exit(2);
    };

    let log_level = sub_matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if sub_matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let mut book = match load_config(sub_matches).and_then(|config| RecipeBook::open(&config)) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    };

    match execute(&mut book, action, mode) {
        Ok(Outcome { output, found }) => {
            println!("{}", output);
            if !found {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    }
}

/// Resolve the config: `--config`, else `./recipebook.toml` when present,
/// else defaults. `--data` overrides the storage path.
fn load_config(matches: &ArgMatches) -> Result<BookConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => BookConfig::from_file(Path::new(path))?,
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            BookConfig::from_file(Path::new(CONFIG_FILE_NAME))?
        }
        None => BookConfig::default(),
    };
    if let Some(data) = matches.get_one::<String>("data") {
        config.storage_path = PathBuf::from(data);
    }
    tracing::debug!(storage_path = %config.storage_path.display(), "Resolved configuration");
    Ok(config)
}

/// Text to print, and whether the named recipe existed.
struct Outcome {
    output: String,
    found: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self { output, found: true }
    }

    fn not_found(title: &str, mode: OutputMode) -> Self {
        Self {
            output: format_message(&format!("Recipe '{}' not found.", title), mode),
            found: false,
        }
    }
}

fn execute(book: &mut RecipeBook, action: CliAction, mode: OutputMode) -> Result<Outcome> {
    let outcome = match action {
        CliAction::Add { recipe, replace } => {
            let title = recipe.title.clone();
            if book.get_recipe(&title)?.is_some() {
                if !replace {
                    return Ok(Outcome {
                        output: format_message(
                            &format!(
                                "Recipe '{}' already exists. Use --replace to overwrite.",
                                title
                            ),
                            mode,
                        ),
                        found: false,
                    });
                }
                book.update_recipe(&title, recipe)?;
                Outcome::ok(format_message(&format!("Recipe '{}' replaced.", title), mode))
            } else {
                book.add_recipe(recipe)?;
                Outcome::ok(format_message(&format!("Recipe '{}' added.", title), mode))
            }
        }
        CliAction::Update { old_title, changes } => match book.get_recipe(&old_title)? {
            Some(existing) => {
                let updated = changes.apply(existing);
                book.update_recipe(&old_title, updated.clone())?;
                Outcome::ok(format_recipe(&updated, mode))
            }
            None => Outcome::not_found(&old_title, mode),
        },
        CliAction::Show { title } => match book.get_recipe(&title)? {
            Some(recipe) => Outcome::ok(format_recipe(&recipe, mode)),
            None => Outcome::not_found(&title, mode),
        },
        CliAction::List { sort } => {
            let recipes = match sort {
                Some((criterion, reverse)) => book.sort_recipes(criterion, reverse),
                None => book.get_all_recipes(),
            };
            Outcome::ok(format_recipes(&recipes, mode, "No recipes found."))
        }
        CliAction::Filter(filter) => {
            let recipes = book.filter_by_ingredients(&filter);
            Outcome::ok(format_recipes(
                &recipes,
                mode,
                "No recipes match the filter criteria.",
            ))
        }
        CliAction::Search { query } => {
            let recipes = book.search_recipes(&query);
            let empty = format!("No recipes found matching '{}'.", query);
            Outcome::ok(format_recipes(&recipes, mode, &empty))
        }
        CliAction::Delete { title } => {
            if book.delete_recipe(&title)? {
                Outcome::ok(format_message(&format!("Recipe '{}' deleted.", title), mode))
            } else {
                Outcome::not_found(&title, mode)
            }
        }
        CliAction::Clear => {
            let count = book.len();
            book.clear()?;
            Outcome::ok(format_message(&format!("Deleted {} recipe(s).", count), mode))
        }
    };
    Ok(outcome)
}
