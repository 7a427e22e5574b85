//! Output formatting utilities

use assist_lib::Severity;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Narrated text with tables (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    pub fn is_table(self) -> bool {
        self == OutputFormat::Table
    }
}

/// Row for the per-artifact summary tables
#[derive(Tabled)]
pub struct CountRow {
    #[tabled(rename = "Artifact")]
    pub artifact: &'static str,
    #[tabled(rename = "Count")]
    pub count: usize,
}

impl CountRow {
    pub fn new(artifact: &'static str, count: usize) -> Self {
        Self { artifact, count }
    }
}

/// Print a table from a list of rows
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No items found".yellow());
        return;
    }
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a title between two full-width rules
pub fn print_banner(title: &str, width: usize) {
    println!("{}", "=".repeat(width));
    println!("{}", title.bold());
    println!("{}", "=".repeat(width));
    println!();
}

/// Print a step heading with an underline rule
pub fn print_section(title: &str, width: usize) {
    println!("{}", title.bold());
    println!("{}", "-".repeat(width));
}

/// Print the user's request as the demo quotes it
pub fn print_request(request: &str) {
    println!("User: \"{}\"", request.italic());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Color alert severity
pub fn color_severity(severity: Severity) -> String {
    match severity {
        Severity::Critical => severity.to_string().red().bold().to_string(),
        Severity::Warning => severity.to_string().yellow().to_string(),
    }
}

/// Color a simulated resource state
pub fn color_state(state: &str) -> String {
    match state.to_lowercase().as_str() {
        "running" | "active" | "ok" => state.green().to_string(),
        "pending" => state.yellow().to_string(),
        "terminated" | "alarm" => state.red().to_string(),
        _ => state.to_string(),
    }
}
