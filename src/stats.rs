//! Stats module for grouping combined tables into per-player batting figures

pub mod aggregate;
mod types;

pub use aggregate::aggregate;
pub use types::{PlayerId, PlayerStats, SortKey, StatsTable};
