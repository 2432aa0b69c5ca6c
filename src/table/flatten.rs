//! Nested JSON → flat table
//!
//! Mirrors the usual "json normalize" behaviour: a top-level object is one
//! row, a top-level array is one row per element, nested object keys are
//! joined with `.` and arrays below the top level are kept as single cells.

use serde_json::{Map, Value};

use super::{Cell, Table};
use crate::error::StatsError;

/// Joins nested keys into a column name
pub const SEPARATOR: char = '.';

/// Flatten one parsed JSON document into a table named after its source.
///
/// # Errors
/// `StatsError::UnsupportedShape` when the document is a bare scalar, or an
/// array containing something other than objects.
pub fn flatten_document(name: &str, document: Value) -> Result<Table, StatsError> {
    let records = match document {
        Value::Object(map) => vec![map],
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(map) => Ok(map),
                other => Err(StatsError::UnsupportedShape {
                    name: name.to_string(),
                    message: format!(
                        "element {} is {}, expected an object",
                        idx,
                        describe(&other)
                    ),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(StatsError::UnsupportedShape {
                name: name.to_string(),
                message: format!(
                    "top-level value is {}, expected an object or an array of objects",
                    describe(&other)
                ),
            });
        }
    };

    let flat_records: Vec<Vec<(String, Cell)>> = records
        .into_iter()
        .map(|map| {
            let mut fields = Vec::new();
            flatten_object(None, map, &mut fields);
            fields
        })
        .collect();

    Ok(build_table(name, flat_records))
}

fn flatten_object(prefix: Option<&str>, map: Map<String, Value>, out: &mut Vec<(String, Cell)>) {
    for (key, value) in map {
        let path = match prefix {
            Some(p) => format!("{}{}{}", p, SEPARATOR, key),
            None => key,
        };
        match value {
            // Empty objects produce no column
            Value::Object(inner) => flatten_object(Some(&path), inner, out),
            leaf => out.push((path, Cell::from_leaf(leaf))),
        }
    }
}

fn build_table(name: &str, records: Vec<Vec<(String, Cell)>>) -> Table {
    let mut table = Table::new(name);

    for record in &records {
        for (column, _) in record {
            if !table.has_column(column) {
                table.columns.push(column.clone());
            }
        }
    }

    let width = table.columns.len();
    table.rows = records
        .into_iter()
        .map(|record| {
            let mut row = vec![Cell::Null; width];
            for (column, cell) in record {
                if let Some(idx) = table.column_index(&column) {
                    row[idx] = cell;
                }
            }
            row
        })
        .collect();

    table
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod flatten_tests;
