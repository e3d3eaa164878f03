//! CSV ingest for the collisions dataset.
//!
//! Turns the raw export into a validated `Dataset`:
//! - required columns are resolved up front (case-insensitive, BOM-tolerant)
//! - every row is parsed and range-checked; the first bad row aborts the load
//! - the geographic code gets its single leading "0" so it matches the
//!   5-digit keys of the county boundary file

use super::schema::{CollisionRecord, Dataset};
use crate::utils::config::{
    COL_COUNTY, COL_DAY, COL_FIPS, COL_HOUR, COL_KILLED, COL_YEAR, FIPS_PAD, FIPS_WIDTH, MAX_DAY,
    MAX_HOUR, REQUIRED_COLUMNS,
};
use crate::utils::error::{LoadError, ValidationError};
use csv::StringRecord;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load and validate the collisions CSV at `path`
///
/// **Public** - main entry point for dataset ingest
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened
/// * `LoadError::MissingColumn` - a required header is absent
/// * `LoadError::InvalidValue` / `LoadError::InvalidRecord` - a row is malformed
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    info!("Loading collisions from: {}", path.display());

    let file = File::open(path)?;
    load_dataset_from_reader(file)
}

/// Load and validate collisions from any reader (file, buffer, stdin)
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut warned_fips: HashSet<String> = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let row = result?;
        // Header is line 1, so the first record is line 2 unless csv knows better.
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let record = parse_row(&row, &columns, line)?;

        if record.fips.len() != FIPS_WIDTH && warned_fips.insert(record.fips.clone()) {
            warn!(
                "Line {}: padded geographic code '{}' is not {} characters; map lookups may miss it",
                line, record.fips, FIPS_WIDTH
            );
        }

        records.push(record);
    }

    let dataset = Dataset::from_validated(records);
    info!("Loaded {} collision records", dataset.len());
    debug!("Dataset: {}", dataset.stats().summary());

    Ok(dataset)
}

/// Prepend the single "0" the map join expects
///
/// The code is read as a number first, so `6037` and `06037` both give
/// `06037`. `raw` must already be checked to be all digits.
pub fn pad_fips(raw: &str) -> String {
    let digits = raw.trim().trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    format!("{}{}", FIPS_PAD, digits)
}

/// Positions of the required columns in the header row
#[derive(Debug, Clone)]
struct ColumnIndex {
    fips: usize,
    county: usize,
    year: usize,
    hour: usize,
    day: usize,
    killed: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let map: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (normalize_header_name(name), idx))
            .collect();

        for column in REQUIRED_COLUMNS {
            if !map.contains_key(*column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        let get = |name: &str| map[name];
        Ok(Self {
            fips: get(COL_FIPS),
            county: get(COL_COUNTY),
            year: get(COL_YEAR),
            hour: get(COL_HOUR),
            day: get(COL_DAY),
            killed: get(COL_KILLED),
        })
    }
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often put a BOM in front of the first header.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex, line: usize) -> Result<CollisionRecord, LoadError> {
    let county = required(row, columns.county, COL_COUNTY, line)?.to_string();

    let raw_fips = required(row, columns.fips, COL_FIPS, line)?;
    if !raw_fips.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(line, COL_FIPS, raw_fips, "must contain only digits"));
    }

    let year = parse_int(row, columns.year, COL_YEAR, line)?;
    let year = i32::try_from(year).map_err(|_| invalid(line, COL_YEAR, &year.to_string(), "out of range"))?;

    let hour = parse_int(row, columns.hour, COL_HOUR, line)?;
    let hour = u8::try_from(hour)
        .ok()
        .filter(|h| *h <= MAX_HOUR)
        .ok_or(LoadError::InvalidRecord {
            line,
            source: ValidationError::HourOutOfRange(hour),
        })?;

    let day = parse_int(row, columns.day, COL_DAY, line)?;
    let day = u8::try_from(day)
        .ok()
        .filter(|d| *d <= MAX_DAY)
        .ok_or(LoadError::InvalidRecord {
            line,
            source: ValidationError::DayOutOfRange(day),
        })?;

    let killed = parse_int(row, columns.killed, COL_KILLED, line)?;
    if killed < 0 {
        return Err(invalid(line, COL_KILLED, &killed.to_string(), "must be non-negative"));
    }
    let killed = u32::try_from(killed)
        .map_err(|_| invalid(line, COL_KILLED, &killed.to_string(), "too large"))?;

    Ok(CollisionRecord::new(county, pad_fips(raw_fips), year, hour, day, killed))
}

fn required<'a>(row: &'a StringRecord, idx: usize, column: &str, line: usize) -> Result<&'a str, LoadError> {
    row.get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid(line, column, "", "missing value"))
}

fn parse_int(row: &StringRecord, idx: usize, column: &str, line: usize) -> Result<i64, LoadError> {
    let raw = required(row, idx, column, line)?;
    raw.parse::<i64>()
        .map_err(|_| invalid(line, column, raw, "not an integer"))
}

fn invalid(line: usize, column: &str, value: &str, reason: &str) -> LoadError {
    LoadError::InvalidValue {
        line,
        column: column.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "FIPS,county,collision_year,collision_hour,collision_day,killed_victims\n";

    fn load(body: &str) -> Result<Dataset, LoadError> {
        let csv = format!("{}{}", HEADER, body);
        load_dataset_from_reader(csv.as_bytes())
    }

    #[test]
    fn test_pad_fips() {
        assert_eq!(pad_fips("6037"), "06037");
        assert_eq!(pad_fips(" 6001 "), "06001");
        assert_eq!(pad_fips("06037"), "06037");
        assert_eq!(pad_fips("0"), "00");
    }

    #[test]
    fn test_load_basic() {
        let dataset = load("6001,alameda,2010,5,0,2\n6037,los angeles,2011,23,6,1\n").unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.county, "alameda");
        assert_eq!(first.fips, "06001");
        assert_eq!(first.year, 2010);
        assert_eq!(first.hour, 5);
        assert_eq!(first.day, 0);
        assert_eq!(first.killed, 2);
    }

    #[test]
    fn test_load_header_only_is_empty_dataset() {
        let dataset = load("").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_headers_case_and_bom() {
        let csv = "\u{feff}fips,County,COLLISION_YEAR,collision_hour,collision_day,Killed_Victims,extra\n\
                   6001,alameda,2010,5,0,2,x\n";
        let dataset = load_dataset_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].fips, "06001");
    }

    #[test]
    fn test_missing_column() {
        let csv = "FIPS,county,collision_year,collision_hour,killed_victims\n6001,alameda,2010,5,2\n";
        let err = load_dataset_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "collision_day"));
    }

    #[test]
    fn test_non_numeric_hour() {
        let err = load("6001,alameda,2010,noon,0,2\n").unwrap_err();
        match err {
            LoadError::InvalidValue { line, column, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, "collision_hour");
                assert_eq!(value, "noon");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_hour_24_rejected() {
        let err = load("6001,alameda,2010,5,0,2\n6001,alameda,2010,24,0,2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidRecord { line: 3, source: ValidationError::HourOutOfRange(24) }
        ));
    }

    #[test]
    fn test_already_padded_fips_not_padded_twice() {
        let dataset = load("06037,los angeles,2010,5,0,1\n6037,los angeles,2011,5,0,2\n").unwrap();
        let codes: Vec<&str> = dataset.records().iter().map(|r| r.fips.as_str()).collect();
        assert_eq!(codes, vec!["06037", "06037"]);
    }

    #[test]
    fn test_negative_hour_rejected() {
        let err = load("6001,alameda,2010,-1,0,2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidRecord { line: 2, source: ValidationError::HourOutOfRange(-1) }
        ));
    }

    #[test]
    fn test_day_7_rejected() {
        let err = load("6001,alameda,2010,5,7,2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidRecord { line: 2, source: ValidationError::DayOutOfRange(7) }
        ));
    }

    #[test]
    fn test_negative_killed_rejected() {
        let err = load("6001,alameda,2010,5,0,-1\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == "killed_victims"));
    }

    #[test]
    fn test_empty_year_rejected() {
        let err = load("6001,alameda,,5,0,1\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref reason, .. } if reason == "missing value"));
    }

    #[test]
    fn test_non_digit_fips_rejected() {
        let err = load("60x1,alameda,2010,5,0,1\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == "fips"));
    }

    #[test]
    fn test_odd_width_fips_kept_as_is() {
        let dataset = load("37,somewhere,2010,5,0,1\n").unwrap();
        assert_eq!(dataset.records()[0].fips, "037");
    }
}
