//! The three views of the "Analyzing Fatal Collisions" page, built together
//! for one year selection.

use super::grouping::{
    aggregate_by_county, aggregate_by_day, aggregate_by_hour, total_killed, CountyTotal, DayTotal,
    HourTotals,
};
use super::selection::YearFilter;
use crate::parser::Dataset;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::ValidationError;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Everything the renderer needs for one year selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Schema version for compatibility checking
    pub version: String,

    /// Year selection the views were built for
    pub year: YearFilter,

    /// Killed victims over every record matching `year`
    pub total_killed: u64,

    /// Map view, ordered by (county, fips)
    pub by_county: Vec<CountyTotal>,

    /// Time-of-day view, ascending by hour
    pub by_hour: HourTotals,

    /// Weekly view, Monday first
    pub by_day: Vec<DayTotal>,

    /// Timestamp when the dashboard was generated
    pub generated_at: String,
}

/// Build all three views for `year`
///
/// **Public** - main entry point for the analysis page
pub fn build_dashboard(dataset: &Dataset, year: YearFilter) -> Result<Dashboard, ValidationError> {
    info!("Aggregating {} records for year selection: {}", dataset.len(), year);

    let dashboard = Dashboard {
        version: SCHEMA_VERSION.to_string(),
        year,
        total_killed: total_killed(dataset, year)?,
        by_county: aggregate_by_county(dataset, year)?,
        by_hour: aggregate_by_hour(dataset, year)?,
        by_day: aggregate_by_day(dataset, year)?,
        generated_at: chrono::Utc::now().to_rfc3339(),
    };

    debug!(
        "Dashboard: {} counties, {} hours, {} days, {} killed",
        dashboard.by_county.len(),
        dashboard.by_hour.len(),
        dashboard.by_day.len(),
        dashboard.total_killed
    );

    Ok(dashboard)
}

impl Dashboard {
    pub fn county_sum(&self) -> u64 {
        self.by_county.iter().map(|c| c.killed).sum()
    }

    pub fn hour_sum(&self) -> u64 {
        self.by_hour.values().sum()
    }

    pub fn day_sum(&self) -> u64 {
        self.by_day.iter().map(|d| d.killed).sum()
    }

    /// True when every view partitions exactly `total_killed`
    pub fn is_consistent(&self) -> bool {
        let total = self.total_killed;
        self.county_sum() == total && self.hour_sum() == total && self.day_sum() == total
    }

    /// True when no record matched the year selection
    pub fn is_empty(&self) -> bool {
        self.by_county.is_empty() && self.by_hour.is_empty() && self.by_day.is_empty()
    }

    /// Counties ordered by fatalities, highest first (ties by name)
    pub fn deadliest_counties(&self, top_n: usize) -> Vec<&CountyTotal> {
        let mut ranked: Vec<&CountyTotal> = self.by_county.iter().collect();
        ranked.sort_by(|a, b| b.killed.cmp(&a.killed).then_with(|| a.county.cmp(&b.county)));
        ranked.truncate(top_n);
        ranked
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Year: {} | Killed: {} | Counties: {} | Hours: {} | Days: {}",
            self.year,
            self.total_killed,
            self.by_county.len(),
            self.by_hour.len(),
            self.by_day.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CollisionRecord;

    fn sample() -> Dataset {
        Dataset::new(vec![
            CollisionRecord::new("Alpha", "00001", 2010, 5, 0, 2),
            CollisionRecord::new("Alpha", "00001", 2010, 5, 0, 1),
            CollisionRecord::new("Beta", "00002", 2011, 10, 3, 4),
            CollisionRecord::new("Gamma", "00003", 2011, 17, 5, 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_dashboard_all() {
        let dashboard = build_dashboard(&sample(), YearFilter::All).unwrap();
        assert_eq!(dashboard.version, SCHEMA_VERSION);
        assert_eq!(dashboard.total_killed, 11);
        assert_eq!(dashboard.by_county.len(), 3);
        assert!(dashboard.is_consistent());
        assert!(!dashboard.is_empty());
    }

    #[test]
    fn test_build_dashboard_empty_year() {
        let dashboard = build_dashboard(&sample(), YearFilter::Year(2020)).unwrap();
        assert_eq!(dashboard.total_killed, 0);
        assert!(dashboard.is_empty());
        assert!(dashboard.is_consistent());
    }

    #[test]
    fn test_build_dashboard_rejects_bad_year() {
        assert!(build_dashboard(&sample(), YearFilter::Year(2030)).is_err());
    }

    #[test]
    fn test_inconsistent_dashboard_detected() {
        let mut dashboard = build_dashboard(&sample(), YearFilter::All).unwrap();
        dashboard.by_day.pop();
        assert!(!dashboard.is_consistent());
    }

    #[test]
    fn test_deadliest_counties_ties_by_name() {
        let dashboard = build_dashboard(&sample(), YearFilter::All).unwrap();
        let top: Vec<&str> = dashboard
            .deadliest_counties(2)
            .iter()
            .map(|c| c.county.as_str())
            .collect();
        assert_eq!(top, vec!["Beta", "Gamma"]);
    }
}
