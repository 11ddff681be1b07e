//! Clap command tree definition.

use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgAction, ArgGroup, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("recipebook")
        .about("Personal recipe book")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default: ./recipebook.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("PATH")
                .help("Recipe document, overrides the config's storage_path")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter when RUST_LOG is unset (default: warn)")
                .default_value("warn")
                .global(true),
        )
        .subcommand(build_add())
        .subcommand(build_update())
        .subcommand(
            Command::new("show")
                .about("Show one recipe")
                .arg(title_arg("title", "Recipe title (case-insensitive)")),
        )
        .subcommand(build_list())
        .subcommand(build_filter())
        .subcommand(
            Command::new("search")
                .about("Search titles and ingredient names")
                .arg(Arg::new("query").required(true).help("Text to look for")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete every recipe with this title")
                .arg(title_arg("title", "Recipe title (case-insensitive)")),
        )
        .subcommand(Command::new("clear").about("Delete all recipes"))
}

fn title_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .required(true)
        .value_parser(NonEmptyStringValueParser::new())
        .help(help)
}

/// Ingredient, instruction, and calorie flags shared by `add` and `update`.
fn recipe_field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("ingredient")
            .long("ingredient")
            .short('i')
            .value_name("AMOUNT NAME")
            .action(ArgAction::Append)
            .help("Ingredient as \"2 cups flour\"; repeat for each ingredient"),
    )
    .arg(
        Arg::new("instructions")
            .long("instructions")
            .value_name("TEXT")
            .help("Preparation instructions"),
    )
    .arg(
        Arg::new("calories")
            .long("calories")
            .value_name("N")
            .value_parser(parse_calories)
            .help("Calorie value (finite number)"),
    )
}

fn parse_calories(text: &str) -> Result<f64, String> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("calories must be a finite number, got '{}'", text)),
        Err(e) => Err(e.to_string()),
    }
}

fn build_add() -> Command {
    recipe_field_args(
        Command::new("add")
            .about("Add a recipe")
            .arg(title_arg("title", "Recipe title"))
            .arg(
                Arg::new("replace")
                    .long("replace")
                    .action(ArgAction::SetTrue)
                    .help("Overwrite a recipe that already has this title"),
            ),
    )
}

fn build_update() -> Command {
    recipe_field_args(
        Command::new("update")
            .about("Change an existing recipe; unspecified fields are kept")
            .arg(title_arg("old-title", "Title of the recipe to change"))
            .arg(
                Arg::new("title")
                    .long("title")
                    .value_name("TITLE")
                    .value_parser(NonEmptyStringValueParser::new())
                    .help("New title"),
            )
            .arg(
                Arg::new("clear-calories")
                    .long("clear-calories")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("calories")
                    .help("Remove the calorie value"),
            ),
    )
}

fn build_list() -> Command {
    Command::new("list")
        .about("List recipes")
        .arg(
            Arg::new("sort")
                .long("sort")
                .short('s')
                .value_name("CRITERION")
                .value_parser(["alphabetical", "ingredient_count", "calories"])
                .help("Sort order (default: collection order)"),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .short('r')
                .action(ArgAction::SetTrue)
                .requires("sort")
                .help("Descending order; recipes without calories stay last"),
        )
}

fn build_filter() -> Command {
    Command::new("filter")
        .about("Filter recipes by ingredient")
        .arg(
            Arg::new("include")
                .long("include")
                .value_name("NAME")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Ingredient that must appear (substring match)"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("NAME")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Ingredient that must not appear (substring match)"),
        )
        .group(
            ArgGroup::new("criteria")
                .args(["include", "exclude"])
                .required(true)
                .multiple(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_filter_requires_criteria() {
        let result = build_cli().try_get_matches_from(["recipebook", "filter"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_calories_must_be_finite() {
        for value in ["inf", "-inf", "NaN", "infinity", "lots"] {
            let result =
                build_cli().try_get_matches_from(["recipebook", "add", "Soup", "--calories", value]);
            assert!(result.is_err(), "accepted --calories {}", value);
        }
        let matches = build_cli()
            .try_get_matches_from(["recipebook", "add", "Soup", "--calories", "250.5"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<f64>("calories"), Some(&250.5));
    }

    #[test]
    fn test_reverse_requires_sort() {
        let result = build_cli().try_get_matches_from(["recipebook", "list", "--reverse"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = build_cli().try_get_matches_from(["recipebook", "add", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["recipebook", "list", "--json", "--data", "x.json"])
            .unwrap();
        let list = matches.subcommand_matches("list").unwrap();
        assert!(list.get_flag("json"));
        assert_eq!(list.get_one::<String>("data").map(String::as_str), Some("x.json"));
    }
}
