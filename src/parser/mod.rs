//! Dataset ingest and record definitions.
//!
//! This module handles:
//! - Reading the collisions CSV
//! - Validating every row at the load boundary
//! - Padding geographic codes for the map join
//! - The immutable `Dataset` handle shared by all aggregations

pub mod collisions_csv;
pub mod schema;

// Re-export main types
pub use collisions_csv::{load_dataset, load_dataset_from_reader, pad_fips};
pub use schema::{CollisionRecord, Dataset, DatasetStats};
