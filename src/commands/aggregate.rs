//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Loads and validates the collisions CSV
//! 2. Builds the county, hour and weekday views for the selected year
//! 3. Writes the JSON dashboard and/or prints the text summary

use super::models::AggregateArgs;
use crate::aggregator::build_dashboard;
use crate::output::{render_text_summary, write_dashboard};
use crate::parser::load_dataset;
use crate::utils::config::MAX_TOP_COUNTIES;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset load or validation failures
/// * Year selection outside the selector range
/// * File write errors
pub fn execute_aggregate(args: AggregateArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading dataset...");
    let dataset = load_dataset(&args.data_path)
        .with_context(|| format!("Failed to load dataset {}", args.data_path.display()))?;

    debug!("Dataset: {}", dataset.stats().summary());

    info!("Step 2/3: Aggregating fatalities for year: {}", args.year);
    let dashboard = build_dashboard(&dataset, args.year)
        .context("Failed to aggregate collisions")?;

    info!("{}", dashboard.summary());
    if dashboard.is_empty() {
        warn!("No collisions match year selection {}", args.year);
    }
    if !dashboard.is_consistent() {
        warn!(
            "View totals disagree: county={} hour={} day={} expected={}",
            dashboard.county_sum(),
            dashboard.hour_sum(),
            dashboard.day_sum(),
            dashboard.total_killed
        );
    }

    info!("Step 3/3: Writing outputs...");
    if let Some(path) = &args.output_json {
        write_dashboard(&dashboard, path)
            .context("Failed to write dashboard JSON")?;
        info!("✓ Dashboard written to: {}", path.display());
    }

    // With nowhere else to send the views, fall back to the terminal.
    if args.print_summary || args.output_json.is_none() {
        println!("{}", render_text_summary(&dashboard, args.top_counties));
    }

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    args.year.validate()?;

    if args.top_counties == 0 {
        anyhow::bail!("top_counties must be greater than 0");
    }

    if args.top_counties > MAX_TOP_COUNTIES {
        anyhow::bail!("top_counties is too large (max {})", MAX_TOP_COUNTIES);
    }

    Ok(())
}
