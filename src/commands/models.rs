use std::path::PathBuf;
use crate::aggregator::YearFilter;
use crate::utils::config::DEFAULT_TOP_COUNTIES;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Collisions CSV to load
    pub data_path: PathBuf,

    /// Year selection applied to every view
    pub year: YearFilter,

    /// Output path for the JSON dashboard (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of counties shown in the text summary
    pub top_counties: usize,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("collisions.csv"),
            year: YearFilter::All,
            output_json: None,
            print_summary: false,
            top_counties: DEFAULT_TOP_COUNTIES,
        }
    }
}
