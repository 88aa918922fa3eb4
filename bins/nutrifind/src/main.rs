//! Nutrifind - local food nutrition lookup.
//!
//! Fuzzy search over a locally installed FoodData Central snapshot, plus
//! exact per-food macro and calorie breakdowns.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrifind_db::{Database, DEFAULT_SEARCH_LIMIT};
use nutrifind_fetch::FetchConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nutrifind")]
#[command(about = "Local food nutrition lookup with fuzzy search")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Alternate database file location
    #[arg(long, global = true, env = "NUTRIFIND_DB_PATH")]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the upstream dataset and install the local database
    Install {
        /// Replace an existing database file
        #[arg(long)]
        overwrite: bool,
    },

    /// Search food names by fuzzy similarity
    Search {
        /// Search term
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Show the macro breakdown for an exactly-named food
    Get {
        /// Exact food name as stored in the database
        name: String,

        /// Serving size to scale to, in grams
        #[arg(short, long, default_value_t = 1.0)]
        grams: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let db_path = cli.db_path.unwrap_or_else(nutrifind_db::default_db_path);

    match cli.command {
        Commands::Install { overwrite } => {
            let config = FetchConfig::from_env();
            nutrifind_fetch::install(&db_path, &config, overwrite).await?;
            println!(
                "{} installed database to {}",
                "✓".green(),
                db_path.display()
            );
        }

        Commands::Search { query, limit } => {
            let db = Database::open(db_path);
            let results = db.search(&query, limit)?;

            if results.is_empty() {
                println!("{} no foods in database", "⚠".yellow());
            }
            for result in results {
                println!("{}  {}", format!("{:>3}", result.score).dimmed(), result.item);
            }
        }

        Commands::Get { name, grams } => {
            let db = Database::open(db_path);
            let serving = db.get(&name)?.multiply(grams);

            println!("{} ({} g)", name.bold(), grams);
            println!("  fat      {:.2} g", serving.fat());
            println!("  carbs    {:.2} g", serving.carbs());
            println!("  protein  {:.2} g", serving.protein());
            println!("  fiber    {:.2} g", serving.fiber());
            println!("  calories {:.1} kcal", serving.calories());
        }
    }

    Ok(())
}
