//! Year selection applied before every aggregation.

use crate::parser::CollisionRecord;
use crate::utils::config::{ALL_YEARS, MAX_YEAR, MIN_YEAR};
use crate::utils::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The dashboard's year selector: every year, or a single year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    /// Build a single-year filter, rejecting years outside the selector range
    pub fn year(year: i32) -> Result<Self, ValidationError> {
        let filter = YearFilter::Year(year);
        filter.validate()?;
        Ok(filter)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            YearFilter::All => Ok(()),
            YearFilter::Year(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(()),
            YearFilter::Year(year) => Err(ValidationError::YearOutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            }),
        }
    }

    pub fn matches(&self, record: &CollisionRecord) -> bool {
        match *self {
            YearFilter::All => true,
            YearFilter::Year(year) => record.year == year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => write!(f, "{}", ALL_YEARS),
            YearFilter::Year(year) => write!(f, "{}", year),
        }
    }
}

impl FromStr for YearFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_YEARS) {
            return Ok(YearFilter::All);
        }
        let year = s
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidYearSelection(s.to_string()))?;
        YearFilter::year(year)
    }
}

// Serialized as "all" or the bare integer year.
impl Serialize for YearFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            YearFilter::All => serializer.serialize_str(ALL_YEARS),
            YearFilter::Year(year) => serializer.serialize_i32(year),
        }
    }
}

impl<'de> Deserialize<'de> for YearFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(i32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Year(year) => YearFilter::year(year).map_err(serde::de::Error::custom),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Options offered by the year selector: "all", then each year ascending
pub fn year_options() -> Vec<YearFilter> {
    std::iter::once(YearFilter::All)
        .chain((MIN_YEAR..=MAX_YEAR).map(YearFilter::Year))
        .collect()
}
