//! Presenting a `StatsTable` outside the interactive UI
//!
//! All three formats share the same column order and number formatting so
//! the text table, CSV and the terminal UI agree cell for cell.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::stats::{PlayerId, PlayerStats, StatsTable};

/// Statistic columns after the player column
pub const STAT_COLUMNS: [&str; 5] = ["innings", "runs", "balls", "average", "strike_rate"];

/// Most decimals any output prints; beyond this f64 carries no digits
pub const MAX_PRECISION: usize = 15;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain text
    #[default]
    Table,
    /// Array of objects; non-finite numbers become null
    Json,
    Csv,
}

/// Header row: the player column name, then the statistics
pub fn header(table: &StatsTable) -> Vec<String> {
    std::iter::once(table.player_column.clone())
        .chain(STAT_COLUMNS.iter().map(|c| c.to_string()))
        .collect()
}

/// Formatted cells of one row, in header order
pub fn cells(row: &PlayerStats, precision: usize) -> Vec<String> {
    vec![
        row.player.to_string(),
        row.innings.to_string(),
        format_count(row.runs),
        format_count(row.balls),
        format_ratio(row.average, precision),
        format_ratio(row.strike_rate, precision),
    ]
}

/// Whole values print without a fractional part
pub fn format_count(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Fixed decimals, at most `MAX_PRECISION`; `inf` and `NaN` print as themselves
pub fn format_ratio(value: f64, precision: usize) -> String {
    format!("{:.*}", precision.min(MAX_PRECISION), value)
}

/// Write `table` to `out` in the chosen format
pub fn write_table<W: Write>(
    out: W,
    table: &StatsTable,
    format: OutputFormat,
    precision: usize,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => write_text(out, table, precision),
        OutputFormat::Json => write_json(out, table, precision),
        OutputFormat::Csv => write_csv(out, table, precision),
    }
}

/// Plain-text table. The player column is left aligned, statistics right
/// aligned; lines carry no trailing whitespace.
pub fn render_text(table: &StatsTable, precision: usize) -> String {
    let header = header(table);
    let rows: Vec<Vec<String>> = table.rows.iter().map(|r| cells(r, precision)).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut text = String::new();
    for line in std::iter::once(&header)
        .chain(std::iter::once(&rule))
        .chain(rows.iter())
    {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect();
        text.push_str(padded.join(COLUMN_GAP).trim_end());
        text.push('\n');
    }
    text
}

fn write_text<W: Write>(mut out: W, table: &StatsTable, precision: usize) -> io::Result<()> {
    out.write_all(render_text(table, precision).as_bytes())?;
    out.flush()
}

/// JSON value for the table: one object per player, keys in header order
pub fn to_json(table: &StatsTable, precision: usize) -> Value {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            let player = match &row.player {
                PlayerId::Number(n) => Value::from(*n),
                PlayerId::Name(s) => Value::from(s.clone()),
            };
            object.insert(table.player_column.clone(), player);
            object.insert("innings".into(), Value::from(row.innings));
            object.insert("runs".into(), count_value(row.runs));
            object.insert("balls".into(), count_value(row.balls));
            object.insert("average".into(), ratio_value(row.average, precision));
            object.insert(
                "strike_rate".into(),
                ratio_value(row.strike_rate, precision),
            );
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

fn count_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

fn ratio_value(value: f64, precision: usize) -> Value {
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    Number::from_f64((value * scale).round() / scale).map_or(Value::Null, Value::Number)
}

fn write_json<W: Write>(mut out: W, table: &StatsTable, precision: usize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, &to_json(table, precision))?;
    writeln!(out)?;
    out.flush()
}

fn write_csv<W: Write>(out: W, table: &StatsTable, precision: usize) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(header(table))?;
    for row in &table.rows {
        writer.write_record(cells(row, precision))?;
    }
    writer.flush()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
