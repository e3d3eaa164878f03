//! JSON dashboard output writer.
//!
//! Writes `Dashboard` structs to JSON files with proper formatting.

use crate::aggregator::Dashboard;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a dashboard to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `dashboard` - Views to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let dashboard = build_dashboard(&dataset, YearFilter::All)?;
/// write_dashboard(&dashboard, "dashboard.json")?;
/// ```
pub fn write_dashboard(dashboard: &Dashboard, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing dashboard to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                )))?;
        }
    }

    let file = File::create(output_path)
        .map_err(OutputError::WriteFailed)?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, dashboard)
        .map_err(OutputError::SerializationFailed)?;

    info!("Dashboard written successfully ({} bytes)",
          calculate_file_size(output_path));

    Ok(())
}

/// Serialize a dashboard to a pretty JSON string
pub fn dashboard_to_string(dashboard: &Dashboard) -> Result<String, OutputError> {
    serde_json::to_string_pretty(dashboard)
        .map_err(OutputError::SerializationFailed)
}

/// Read a dashboard from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_dashboard(input_path: impl AsRef<Path>) -> Result<Dashboard, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading dashboard from: {}", input_path.display());

    let file = File::open(input_path)
        .map_err(OutputError::WriteFailed)?;

    let dashboard: Dashboard = serde_json::from_reader(file)
        .map_err(OutputError::SerializationFailed)?;

    debug!("Dashboard loaded: version {}, year {}",
           dashboard.version,
           dashboard.year);

    Ok(dashboard)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path)
        .map(|m| m.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{build_dashboard, YearFilter};
    use crate::parser::{CollisionRecord, Dataset};
    use tempfile::NamedTempFile;

    fn create_test_dashboard() -> Dashboard {
        let dataset = Dataset::new(vec![
            CollisionRecord::new("Alpha", "00001", 2010, 5, 0, 2),
            CollisionRecord::new("Beta", "00002", 2011, 10, 3, 4),
        ])
        .unwrap();
        build_dashboard(&dataset, YearFilter::All).unwrap()
    }

    #[test]
    fn test_write_and_read_dashboard() {
        let dashboard = create_test_dashboard();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_dashboard(&dashboard, path).unwrap();
        let loaded = read_dashboard(path).unwrap();

        assert_eq!(loaded, dashboard);
    }

    #[test]
    fn test_dashboard_json_shape() {
        let dashboard = create_test_dashboard();
        let json = dashboard_to_string(&dashboard).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["year"], "all");
        assert_eq!(value["total_killed"], 6);
        assert_eq!(value["by_county"][0]["fips"], "00001");
        assert_eq!(value["by_hour"]["10"], 4);
        assert_eq!(value["by_day"][1]["day"], "Thurs");
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/dashboard.json");

        let dashboard = create_test_dashboard();
        write_dashboard(&dashboard, &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
