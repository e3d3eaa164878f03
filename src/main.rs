//! Collision Dashboard CLI
//!
//! Aggregates the California traffic collisions dataset into the
//! county, hour-of-day and day-of-week fatality views.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use collision_dashboard::aggregator::YearFilter;
use collision_dashboard::commands::{
    display_version, display_years, execute_aggregate, inspect_dataset, validate_args,
    AggregateArgs,
};
use collision_dashboard::utils::config::DEFAULT_TOP_COUNTIES;

/// Collision Dashboard - fatality views of California traffic collisions
#[derive(Parser, Debug)]
#[command(name = "collisions")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the county, hour and weekday views for a year selection
    Aggregate {
        /// Collisions CSV
        #[arg(short, long, env = "COLLISIONS_CSV", default_value = "collisions.csv")]
        data: PathBuf,

        /// "all" or a year between 2001 and 2021
        #[arg(short, long, default_value = "all")]
        year: YearFilter,

        /// Output path for the JSON dashboard
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of counties listed in the text summary
        #[arg(long, default_value_t = DEFAULT_TOP_COUNTIES)]
        top_counties: usize,
    },

    /// Load a collisions CSV and report what it contains
    Inspect {
        /// Collisions CSV
        #[arg(short, long, env = "COLLISIONS_CSV", default_value = "collisions.csv")]
        data: PathBuf,
    },

    /// List the accepted year selections
    Years,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Aggregate {
            data,
            year,
            output,
            summary,
            top_counties,
        } => {
            let args = AggregateArgs {
                data_path: data,
                year,
                output_json: output,
                print_summary: summary,
                top_counties,
            };

            validate_args(&args)?;
            execute_aggregate(args)?;
        }

        Commands::Inspect { data } => {
            inspect_dataset(&data)?;
        }

        Commands::Years => {
            display_years();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
