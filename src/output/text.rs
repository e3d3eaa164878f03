//! Terminal rendering of a dashboard: county table plus hour and weekday bars.

use crate::aggregator::Dashboard;

const BAR_WIDTH: usize = 40;
const COUNTY_COL: usize = 24;

/// Render the three views as plain text
///
/// **Public** - used by `collisions aggregate --summary`
///
/// # Arguments
/// * `dashboard` - Views to render
/// * `top_counties` - Number of counties listed, deadliest first
pub fn render_text_summary(dashboard: &Dashboard, top_counties: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  FATAL COLLISIONS - year: {}", dashboard.year));
    lines.push(format!("  Total killed: {}", dashboard.total_killed));

    if dashboard.is_empty() {
        lines.push(String::new());
        lines.push("  No collisions recorded for this selection.".to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push("  FATALITIES BY COUNTY".to_string());
    lines.push(format!("  ┏{}┳{}┳{}┓", "━".repeat(COUNTY_COL + 2), "━".repeat(7), "━".repeat(10)));
    lines.push(format!("  ┃ {:<width$} ┃ {:^5} ┃ {:>8} ┃", "County", "FIPS", "Killed", width = COUNTY_COL));
    lines.push(format!("  ┣{}╋{}╋{}┫", "━".repeat(COUNTY_COL + 2), "━".repeat(7), "━".repeat(10)));
    for county in dashboard.deadliest_counties(top_counties) {
        lines.push(format!(
            "  ┃ {:<width$} ┃ {:^5} ┃ {:>8} ┃",
            truncate(&county.county, COUNTY_COL),
            county.fips,
            county.killed,
            width = COUNTY_COL
        ));
    }
    lines.push(format!("  ┗{}┻{}┻{}┛", "━".repeat(COUNTY_COL + 2), "━".repeat(7), "━".repeat(10)));
    if dashboard.by_county.len() > top_counties {
        lines.push(format!("  ... {} more counties", dashboard.by_county.len() - top_counties));
    }

    lines.push(String::new());
    lines.push("  FATALITIES BY HOUR".to_string());
    let hour_max = dashboard.by_hour.values().copied().max().unwrap_or(0);
    for (hour, killed) in &dashboard.by_hour {
        lines.push(format!("  {:>5} │{} {}", format!("{:02}h", hour), bar(*killed, hour_max), killed));
    }

    lines.push(String::new());
    lines.push("  FATALITIES BY DAY OF WEEK".to_string());
    let day_max = dashboard.by_day.iter().map(|d| d.killed).max().unwrap_or(0);
    for day in &dashboard.by_day {
        lines.push(format!("  {:>5} │{} {}", day.label(), bar(day.killed, day_max), day.killed));
    }

    lines.join("\n")
}

/// Bar scaled so the largest value in the view spans `BAR_WIDTH` cells
fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 3).collect();
    out.push_str("...");
    out
}
