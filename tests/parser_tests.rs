use collision_dashboard::aggregator::{build_dashboard, YearFilter};
use collision_dashboard::parser::load_dataset;
use collision_dashboard::utils::{LoadError, ValidationError};
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_pads_fips_and_aggregates() {
    let file = csv_file(
        "case_id,FIPS,county,collision_year,collision_hour,collision_day,killed_victims\n\
         1,6037,los angeles,2015,22,5,1\n\
         2,6037,los angeles,2015,23,6,2\n\
         3,6073,san diego,2016,8,1,1\n",
    );

    let dataset = load_dataset(file.path()).unwrap();
    assert_eq!(dataset.len(), 3);
    assert!(dataset.records().iter().all(|r| r.fips.len() == 5));

    let dashboard = build_dashboard(&dataset, YearFilter::Year(2015)).unwrap();
    assert_eq!(dashboard.by_county.len(), 1);
    assert_eq!(dashboard.by_county[0].fips, "06037");
    assert_eq!(dashboard.by_county[0].killed, 3);
    assert_eq!(dashboard.by_day.iter().map(|d| d.label()).collect::<Vec<_>>(), vec!["Sat", "Sun"]);
}

#[test]
fn test_missing_file() {
    let err = load_dataset("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_missing_killed_column() {
    let file = csv_file("FIPS,county,collision_year,collision_hour,collision_day\n6037,la,2015,1,1\n");
    let err = load_dataset(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Missing required column: `killed_victims`");
}

#[test]
fn test_out_of_range_day_reports_line() {
    let file = csv_file(
        "FIPS,county,collision_year,collision_hour,collision_day,killed_victims\n\
         6037,la,2015,1,1,1\n\
         6037,la,2015,1,1,1\n\
         6037,la,2015,1,8,1\n",
    );
    let err = load_dataset(file.path()).unwrap_err();
    match err {
        LoadError::InvalidRecord { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(source, ValidationError::DayOutOfRange(8));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_numeric_year() {
    let file = csv_file(
        "FIPS,county,collision_year,collision_hour,collision_day,killed_victims\n\
         6037,la,twenty,1,1,1\n",
    );
    let err = load_dataset(file.path()).unwrap_err();
    assert!(err.to_string().contains("collision_year"));
}

#[test]
fn test_zero_padded_and_bare_fips_join_the_same_county() {
    let file = csv_file(
        "FIPS,county,collision_year,collision_hour,collision_day,killed_victims\n\
         06037,los angeles,2015,1,1,1\n\
         6037,los angeles,2015,2,2,2\n",
    );
    let dataset = load_dataset(file.path()).unwrap();
    assert!(dataset.records().iter().all(|r| r.fips == "06037"));

    let dashboard = build_dashboard(&dataset, YearFilter::All).unwrap();
    assert_eq!(dashboard.by_county.len(), 1);
    assert_eq!(dashboard.by_county[0].killed, 3);
}
