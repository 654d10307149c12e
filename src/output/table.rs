//! Table output formatting

use serde_json::Value;
use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::formatters::truncate_string;

/// Widest cell rendered for free-form API values
const MAX_CELL_WIDTH: usize = 60;

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    style(&mut table);
    table.to_string()
}

/// Format an arbitrary JSON body as a table.
///
/// - object: one `FIELD | VALUE` row per key
/// - array of objects: one row per item, columns from the first item's keys
/// - anything else: the compact JSON text
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                return "No results found.".to_string();
            }
            let mut builder = Builder::default();
            builder.push_record(["FIELD".to_string(), "VALUE".to_string()]);
            for (key, val) in map {
                builder.push_record([key.clone(), cell(val)]);
            }
            let mut table = builder.build();
            style(&mut table);
            table.to_string()
        }
        Value::Array(items) => match items.first() {
            None => "No results found.".to_string(),
            Some(Value::Object(first)) => {
                let columns: Vec<String> = first.keys().cloned().collect();
                let mut builder = Builder::default();
                builder.push_record(columns.iter().map(|c| c.to_uppercase()));
                for item in items {
                    builder.push_record(
                        columns
                            .iter()
                            .map(|c| item.get(c).map(cell).unwrap_or_default()),
                    );
                }
                let mut table = builder.build();
                style(&mut table);
                table.to_string()
            }
            Some(_) => {
                let mut builder = Builder::default();
                builder.push_record(["VALUE".to_string()]);
                for item in items {
                    builder.push_record([cell(item)]);
                }
                let mut table = builder.build();
                style(&mut table);
                table.to_string()
            }
        },
        other => cell(other),
    }
}

fn style(table: &mut Table) {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
}

fn cell(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    };
    truncate_string(&text, MAX_CELL_WIDTH)
}
