//! Collision record and dataset definitions.
//!
//! A `Dataset` is the validated, read-only record set that every
//! aggregation borrows. It is built once by the loader (or explicitly in
//! tests) and never mutated afterwards.

use crate::utils::config::{MAX_DAY, MAX_HOUR};
use crate::utils::error::ValidationError;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// One fatal collision row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionRecord {
    /// County name (e.g. "los angeles")
    pub county: String,

    /// Zero-padded geographic code used by the map join (e.g. "06037")
    pub fips: String,

    /// Collision year
    pub year: i32,

    /// Hour of day, 0-23
    pub hour: u8,

    /// Day of week, 0-6 with Monday = 0
    pub day: u8,

    /// Number of people killed
    pub killed: u32,
}

impl CollisionRecord {
    pub fn new(
        county: impl Into<String>,
        fips: impl Into<String>,
        year: i32,
        hour: u8,
        day: u8,
        killed: u32,
    ) -> Self {
        Self {
            county: county.into(),
            fips: fips.into(),
            year,
            hour,
            day,
            killed,
        }
    }

    /// Check the category fields are inside their domains
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.county.trim().is_empty() {
            return Err(ValidationError::EmptyCounty);
        }
        if self.fips.is_empty() || !self.fips.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFips(self.fips.clone()));
        }
        if self.hour > MAX_HOUR {
            return Err(ValidationError::HourOutOfRange(i64::from(self.hour)));
        }
        if self.day > MAX_DAY {
            return Err(ValidationError::DayOutOfRange(i64::from(self.day)));
        }
        Ok(())
    }
}

/// Immutable handle over a validated set of collision records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CollisionRecord>,
}

impl Dataset {
    /// Build a dataset, rejecting the first record that fails validation
    pub fn new(records: Vec<CollisionRecord>) -> Result<Self, ValidationError> {
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    /// Wrap records the loader has already validated row by row
    pub(crate) fn from_validated(records: Vec<CollisionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CollisionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct collision years present, ascending
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        years.into_iter().collect()
    }

    /// Summary statistics for the whole record set
    pub fn stats(&self) -> DatasetStats {
        let counties: HashSet<&str> = self.records.iter().map(|r| r.county.as_str()).collect();
        let years = self.years();

        DatasetStats {
            record_count: self.records.len(),
            total_killed: self.records.iter().map(|r| u64::from(r.killed)).sum(),
            county_count: counties.len(),
            first_year: years.first().copied(),
            last_year: years.last().copied(),
            years,
        }
    }
}

/// Dataset summary shown by `collisions inspect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub record_count: usize,
    pub total_killed: u64,
    pub county_count: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub years: Vec<i32>,
}

impl DatasetStats {
    pub fn summary(&self) -> String {
        let span = match (self.first_year, self.last_year) {
            (Some(first), Some(last)) => format!("{}-{}", first, last),
            _ => "n/a".to_string(),
        };
        format!(
            "Records: {} | Killed: {} | Counties: {} | Years: {}",
            self.record_count, self.total_killed, self.county_count, span
        )
    }
}
