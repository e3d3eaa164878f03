//! Output writers for dashboard data.
//!
//! This module handles handing the views to consumers:
//! - JSON dashboards (for the chart and map renderer)
//! - Text summaries (for the terminal)

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{dashboard_to_string, read_dashboard, write_dashboard};
pub use text::render_text_summary;
