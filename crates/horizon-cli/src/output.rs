//! Output formatting utilities

use colored::*;
use horizon_core::{CivilizationBand, Scenario};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print rows as a table
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No results".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a section heading
pub fn print_heading(title: &str) {
    println!("{}", title.bold());
}

/// Scenario id, colored by how risky the outcome is
pub fn colorize_scenario(scenario: Scenario) -> ColoredString {
    match scenario {
        Scenario::Utopian => scenario.as_str().green(),
        Scenario::Race => scenario.as_str().yellow(),
        Scenario::Slowdown => scenario.as_str().blue(),
        Scenario::Uncontrolled => scenario.as_str().red(),
    }
}

/// Year with the model's one-decimal precision
pub fn year_cell(year: f64) -> String {
    format!("{year:.1}")
}

/// Capability as a percentage
pub fn capability_cell(capability: f64) -> String {
    format!("{:.1}%", capability * 100.0)
}

/// Short band label, e.g. `Type I (Planetary Civilization)`
pub fn band_cell(band: &CivilizationBand) -> String {
    format!("{} ({})", band.name, band.subtitle)
}
