//! Group-and-sum of killed victims along the three dashboard dimensions.
//!
//! Each aggregation applies the same year filter and then partitions the
//! surviving records by one key, so the totals of every view add up to the
//! same number of fatalities.

use super::selection::YearFilter;
use super::weekday::DayOfWeek;
use crate::parser::{CollisionRecord, Dataset};
use crate::utils::error::ValidationError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fatalities per hour of day, ascending by hour
///
/// Hours without collisions are absent rather than zero.
pub type HourTotals = BTreeMap<u8, u64>;

/// Fatalities for one county (a choropleth map cell)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyTotal {
    pub county: String,

    /// 5-digit geographic code joined against the boundary file
    pub fips: String,

    pub killed: u64,
}

/// Fatalities for one day of the week (a weekday bar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotal {
    pub day: DayOfWeek,
    pub killed: u64,
}

impl DayTotal {
    pub fn label(&self) -> &'static str {
        self.day.label()
    }
}

/// Sum killed victims per (county, geographic code)
///
/// **Public** - feeds the choropleth map
///
/// # Returns
/// Rows ordered by (county, fips); empty when no record matches `year`
///
/// # Errors
/// `ValidationError::YearOutOfRange` for a year outside the selector range
pub fn aggregate_by_county(dataset: &Dataset, year: YearFilter) -> Result<Vec<CountyTotal>, ValidationError> {
    year.validate()?;

    let mut groups: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    for record in filtered(dataset, year) {
        *groups
            .entry((record.county.as_str(), record.fips.as_str()))
            .or_insert(0) += u64::from(record.killed);
    }

    debug!("County view for {}: {} groups", year, groups.len());

    Ok(groups
        .into_iter()
        .map(|((county, fips), killed)| CountyTotal {
            county: county.to_string(),
            fips: fips.to_string(),
            killed,
        })
        .collect())
}

/// Sum killed victims per hour of day
///
/// **Public** - feeds the time-of-day bar chart
pub fn aggregate_by_hour(dataset: &Dataset, year: YearFilter) -> Result<HourTotals, ValidationError> {
    year.validate()?;

    let mut totals = HourTotals::new();
    for record in filtered(dataset, year) {
        *totals.entry(record.hour).or_insert(0) += u64::from(record.killed);
    }

    debug!("Hour view for {}: {} hours present", year, totals.len());

    Ok(totals)
}

/// Sum killed victims per day of week, Monday first
///
/// **Public** - feeds the weekly pattern bar chart
///
/// # Errors
/// * `ValidationError::YearOutOfRange` - bad year selection
/// * `ValidationError::DayOutOfRange` - a record's day code has no label
pub fn aggregate_by_day(dataset: &Dataset, year: YearFilter) -> Result<Vec<DayTotal>, ValidationError> {
    year.validate()?;

    let mut by_code: BTreeMap<u8, u64> = BTreeMap::new();
    for record in filtered(dataset, year) {
        *by_code.entry(record.day).or_insert(0) += u64::from(record.killed);
    }

    by_code
        .into_iter()
        .map(|(code, killed)| {
            Ok(DayTotal {
                day: DayOfWeek::try_from(code)?,
                killed,
            })
        })
        .collect()
}

/// Total killed victims over the records matching `year`
pub fn total_killed(dataset: &Dataset, year: YearFilter) -> Result<u64, ValidationError> {
    year.validate()?;
    Ok(filtered(dataset, year).map(|r| u64::from(r.killed)).sum())
}

fn filtered(dataset: &Dataset, year: YearFilter) -> impl Iterator<Item = &CollisionRecord> {
    dataset.records().iter().filter(move |r| year.matches(r))
}
