//! Aggregation of collision records into dashboard views.
//!
//! This module transforms the loaded dataset into:
//! - Per-county fatality totals (choropleth map)
//! - Per-hour fatality totals (time-of-day chart)
//! - Per-weekday fatality totals (weekly pattern chart)

pub mod dashboard;
pub mod grouping;
pub mod selection;
pub mod weekday;

// Re-export main types and functions
pub use dashboard::{build_dashboard, Dashboard};
pub use grouping::{
    aggregate_by_county, aggregate_by_day, aggregate_by_hour, total_killed, CountyTotal, DayTotal,
    HourTotals,
};
pub use selection::{year_options, YearFilter};
pub use weekday::DayOfWeek;
