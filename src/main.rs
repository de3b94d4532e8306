//! Command-line front-end for the tier list engine
//!
//! Stands in for the web layer during development and data checks:
//! loads a character roster from JSON, applies filters and prints either
//! the grouped public tier list, the sorted admin listing or the
//! selectable filter options.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tier_board::config::AppConfig;
use tier_board::listing::{class_options, difficulty_options, faction_options};
use tier_board::{
    group_filtered, resolve_filters, sort_characters, Character, CharacterFilter, SortSpec,
};
use tracing::info;

/// Tier Board - tier list aggregation and filtering engine
#[derive(Parser)]
#[command(
    name = "tier-board",
    version,
    about = "Inspect a character roster through the tier list engine",
    long_about = "Loads a character roster from a JSON file and runs it through the tier \
                 aggregation and filtering engine: grouped tier-list view, column-sorted \
                 admin view, or the derived filter option lists."
)]
struct Args {
    /// Path to the character roster (JSON array of characters)
    #[arg(short, long, value_name = "FILE")]
    roster: PathBuf,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the public tier list, grouped by overall tier
    List {
        /// Filter by class name (exact match)
        #[arg(long)]
        class_name: Option<String>,
        /// Filter by faction (exact match)
        #[arg(long)]
        faction: Option<String>,
        /// Filter by difficulty (canonical label or legacy spelling)
        #[arg(long)]
        difficulty: Option<String>,
        /// Case-insensitive name substring search
        #[arg(long)]
        search: Option<String>,
    },
    /// Print the admin listing sorted by column
    Admin {
        /// Sort column: id, name, class_name, faction or overall_tier
        #[arg(long, default_value = "name")]
        sort: String,
        /// Sort direction: asc or desc
        #[arg(long, default_value = "asc")]
        direction: String,
    },
    /// Print the selectable filter options derived from the roster
    Options,
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

fn load_roster(path: &Path) -> Result<Vec<Character>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    let characters: Vec<Character> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse roster file {}", path.display()))?;
    Ok(characters)
}

fn init_logging(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_logging(&config.service.log_level);

    let aliases = config.difficulty_aliases()?;
    let characters = load_roster(&args.roster)?;
    info!(
        service = %config.service.name,
        characters = characters.len(),
        "loaded character roster"
    );

    match args.command {
        Command::List {
            class_name,
            faction,
            difficulty,
            search,
        } => {
            let filter = CharacterFilter::from_params(
                class_name.as_deref(),
                faction.as_deref(),
                difficulty.as_deref(),
                search.as_deref(),
            );
            let filtered = resolve_filters(&filter, &aliases, &characters);
            let groups = group_filtered(filtered);
            for group in &groups {
                println!("{}:", group.tier);
                for ch in &group.characters {
                    println!("  {}", ch.name);
                }
            }
        }
        Command::Admin { sort, direction } => {
            let spec = SortSpec::from_params(Some(&sort), Some(&direction));
            for ch in sort_characters(&characters, spec) {
                println!(
                    "{:>4}  {:<24} {:<12} {:<12} {}",
                    ch.id,
                    ch.name,
                    ch.class_name.as_deref().unwrap_or("-"),
                    ch.faction.as_deref().unwrap_or("-"),
                    ch.overall_tier()
                );
            }
        }
        Command::Options => {
            println!("classes: {}", class_options(&characters).join(", "));
            println!("factions: {}", faction_options(&characters).join(", "));
            println!(
                "difficulties: {}",
                difficulty_options(&characters, &aliases).join(", ")
            );
        }
    }

    Ok(())
}
