//! Collision Dashboard
//!
//! Fatality views of the California traffic collisions dataset:
//! per-county totals for a choropleth map, and per-hour and
//! per-weekday totals for bar charts, filterable by year.
//!
//! This crate provides the core implementation for the
//! `collisions` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! collisions aggregate --data collisions.csv --year 2015 --output dashboard.json
//! collisions --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
