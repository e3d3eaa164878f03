//! Configuration and constants for the CLI.

/// Current dashboard output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Year selector bounds (inclusive) offered by the dashboard
pub const MIN_YEAR: i32 = 2001;
pub const MAX_YEAR: i32 = 2021;

/// Selector value meaning "no year filter"
pub const ALL_YEARS: &str = "all";

// Column names expected in the collisions CSV (matched case-insensitively)
pub const COL_FIPS: &str = "fips";
pub const COL_COUNTY: &str = "county";
pub const COL_YEAR: &str = "collision_year";
pub const COL_HOUR: &str = "collision_hour";
pub const COL_DAY: &str = "collision_day";
pub const COL_KILLED: &str = "killed_victims";

pub const REQUIRED_COLUMNS: &[&str] = &[COL_FIPS, COL_COUNTY, COL_YEAR, COL_HOUR, COL_DAY, COL_KILLED];

// The map renderer joins on 5-character county codes.
// Source codes are 4 digits, so exactly one "0" is prepended.
pub const FIPS_PAD: &str = "0";
pub const FIPS_WIDTH: usize = 5;

pub const MAX_HOUR: u8 = 23;
pub const MAX_DAY: u8 = 6;

/// Default number of counties listed in the text summary
pub const DEFAULT_TOP_COUNTIES: usize = 15;
pub const MAX_TOP_COUNTIES: usize = 100;
