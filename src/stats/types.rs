//! Type definitions for batting statistics

use std::cmp::Ordering;
use std::fmt;

use clap::ValueEnum;

use crate::table::Cell;

/// Value a row is grouped by.
///
/// Numeric identifiers sort before names, numerically; names sort
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerId {
    Number(i64),
    Name(String),
}

impl PlayerId {
    /// Group key for a cell; `None` for null cells, which join no group
    pub fn from_cell(cell: &Cell) -> Option<Self> {
        match cell {
            Cell::Null => None,
            Cell::Int(i) => Some(PlayerId::Number(*i)),
            Cell::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Some(PlayerId::Number(*f as i64))
            }
            Cell::Text(s) => Some(PlayerId::Name(s.clone())),
            other => Some(PlayerId::Name(other.to_string())),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Number(n) => write!(f, "{}", n),
            PlayerId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        PlayerId::Name(name.to_string())
    }
}

/// One aggregate row
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub player: PlayerId,
    /// Rows that named this player
    pub innings: u64,
    pub runs: f64,
    pub balls: f64,
    /// runs / innings
    pub average: f64,
    /// runs / balls * 100; not finite when balls is zero
    pub strike_rate: f64,
}

impl PlayerStats {
    pub fn new(player: PlayerId, innings: u64, runs: f64, balls: f64) -> Self {
        Self {
            player,
            innings,
            runs,
            balls,
            average: runs / innings as f64,
            strike_rate: runs / balls * 100.0,
        }
    }
}

/// Column the output rows are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Player identifier, ascending (group-by order)
    #[default]
    Player,
    Innings,
    Runs,
    Balls,
    Average,
    StrikeRate,
}

/// The aggregate result: one row per player
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    /// Name of the player column, used as the first output header
    pub player_column: String,
    pub rows: Vec<PlayerStats>,
}

impl StatsTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, player: &PlayerId) -> Option<&PlayerStats> {
        self.rows.iter().find(|row| &row.player == player)
    }

    /// Reorder rows. Statistics sort descending with NaN last; ties and
    /// `SortKey::Player` fall back to ascending player order.
    pub fn sort_by(&mut self, key: SortKey) {
        let value = |row: &PlayerStats| -> f64 {
            match key {
                SortKey::Player => 0.0,
                SortKey::Innings => row.innings as f64,
                SortKey::Runs => row.runs,
                SortKey::Balls => row.balls,
                SortKey::Average => row.average,
                SortKey::StrikeRate => row.strike_rate,
            }
        };

        self.rows.sort_by(|a, b| {
            descending_nan_last(value(a), value(b)).then_with(|| a.player.cmp(&b.player))
        });
    }
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
