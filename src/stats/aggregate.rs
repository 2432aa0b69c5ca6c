//! Concatenate validated tables and group them by player

use std::collections::BTreeMap;

use super::types::{PlayerId, PlayerStats, StatsTable};
use crate::config::ColumnsConfig;
use crate::error::StatsError;
use crate::table::{Cell, Table};

/// Name reported when the combined table lacks a column
pub const COMBINED_NAME: &str = "Combined data";

/// Running totals for one player
#[derive(Debug, Clone, Default)]
struct PlayerAgg {
    innings: u64,
    runs: f64,
    balls: f64,
}

impl PlayerAgg {
    /// Null or non-numeric cells add nothing to the sums
    fn update(&mut self, runs: &Cell, balls: &Cell) {
        self.innings += 1;
        self.runs += runs.as_f64().unwrap_or(0.0);
        self.balls += balls.as_f64().unwrap_or(0.0);
    }
}

/// Group the row-wise union of `tables` by the player column.
///
/// Rows with a null player are skipped. Output rows are in ascending player
/// order.
///
/// # Errors
/// * `NoValidData` if `tables` is empty
/// * `MissingColumn` if no table carries the player, runs or balls column
pub fn aggregate(tables: &[Table], columns: &ColumnsConfig) -> Result<StatsTable, StatsError> {
    if tables.is_empty() {
        return Err(StatsError::NoValidData);
    }

    let combined = Table::concat(COMBINED_NAME, tables);
    log::debug!(
        "Combined {} tables into {} rows",
        tables.len(),
        combined.row_count()
    );

    let player_idx = required_column(&combined, &columns.player)?;
    let runs_idx = required_column(&combined, &columns.runs)?;
    let balls_idx = required_column(&combined, &columns.balls)?;

    let mut groups: BTreeMap<PlayerId, PlayerAgg> = BTreeMap::new();
    for row in &combined.rows {
        let Some(player) = PlayerId::from_cell(&row[player_idx]) else {
            continue;
        };
        groups
            .entry(player)
            .or_default()
            .update(&row[runs_idx], &row[balls_idx]);
    }

    let rows = groups
        .into_iter()
        .map(|(player, agg)| PlayerStats::new(player, agg.innings, agg.runs, agg.balls))
        .collect();

    Ok(StatsTable {
        player_column: columns.player.clone(),
        rows,
    })
}

fn required_column(table: &Table, column: &str) -> Result<usize, StatsError> {
    table
        .column_index(column)
        .ok_or_else(|| StatsError::MissingColumn {
            name: table.name.clone(),
            column: column.to_string(),
        })
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
