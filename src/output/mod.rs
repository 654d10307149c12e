//! Output formatting for CLI results

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Print a list of display rows as a table or a JSON document
pub fn print_rows<T: tabled::Tabled + Serialize>(rows: &[T], format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Table => table::format_table(rows),
        OutputFormat::Json => json::format_json(rows)?,
    };
    println!("{}", output);
    Ok(())
}

/// Print an arbitrary API response body
pub fn print_value(value: &serde_json::Value, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Table => table::format_value(value),
        OutputFormat::Json => json::format_json(value)?,
    };
    println!("{}", output);
    Ok(())
}
