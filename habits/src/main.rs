//! Admin CLI for a habit CSV store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use habits::core::invariants::validate_invariants;
use habits::exit_codes;
use habits::io::{CsvStore, HabitStore};
use habits::logging;
use habits::service::list_habits;

#[derive(Parser)]
#[command(name = "habits", version, about = "Inspect and maintain a habit CSV store")]
struct Cli {
    /// Path to the habits CSV file.
    #[arg(long, global = true, env = "HABITS_DATA", default_value = "data/habits.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the CSV file with its header row if missing.
    Init,
    /// Print all habits as JSON.
    List,
    /// Check the file parses and ids are unique, titles non-empty, timestamps ordered.
    Validate,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let store = CsvStore::new(&cli.data);
    match cli.command {
        Command::Init => cmd_init(&store),
        Command::List => cmd_list(&store),
        Command::Validate => cmd_validate(&store),
    }
}

fn cmd_init(store: &CsvStore) -> Result<i32> {
    store
        .ensure()
        .with_context(|| format!("initialize {}", store.path().display()))?;
    Ok(exit_codes::OK)
}

fn cmd_list(store: &CsvStore) -> Result<i32> {
    let habits = list_habits(store).context("list habits")?;
    println!("{}", serde_json::to_string_pretty(&habits)?);
    Ok(exit_codes::OK)
}

fn cmd_validate(store: &CsvStore) -> Result<i32> {
    let habits = store
        .read_all()
        .with_context(|| format!("read {}", store.path().display()))?;
    let errors = validate_invariants(&habits);
    if errors.is_empty() {
        return Ok(exit_codes::OK);
    }
    for err in &errors {
        eprintln!("- {}", err);
    }
    Ok(exit_codes::INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_data_path() {
        let cli = Cli::parse_from(["habits", "list"]);
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.data, PathBuf::from("data/habits.csv"));
    }

    #[test]
    fn parse_data_after_subcommand() {
        let cli = Cli::parse_from(["habits", "validate", "--data", "x.csv"]);
        assert!(matches!(cli.command, Command::Validate));
        assert_eq!(cli.data, PathBuf::from("x.csv"));
    }
}
