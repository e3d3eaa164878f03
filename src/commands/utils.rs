use anyhow::{Context, Result};
use std::path::Path;
use crate::aggregator::year_options;
use crate::parser::load_dataset;
use crate::utils::config::SCHEMA_VERSION;

/// Load a collisions CSV and print what it contains
pub fn inspect_dataset(file_path: &Path) -> Result<()> {
    println!("Inspecting dataset: {}", file_path.display());

    let dataset = load_dataset(file_path)
        .with_context(|| format!("Failed to load dataset {}", file_path.display()))?;
    let stats = dataset.stats();

    println!("✓ Valid collisions CSV");
    println!("  Records: {}", stats.record_count);
    println!("  Killed Victims: {}", stats.total_killed);
    println!("  Counties: {}", stats.county_count);
    match (stats.first_year, stats.last_year) {
        (Some(first), Some(last)) => println!("  Years: {} - {} ({} distinct)", first, last, stats.years.len()),
        _ => println!("  Years: none"),
    }

    Ok(())
}

/// Display the values accepted by `--year`
pub fn display_years() {
    for option in year_options() {
        println!("{}", option);
    }
}

/// Display version information
pub fn display_version() {
    println!("Collision Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Dashboard Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Fatality views of the California traffic collisions dataset.");
}
