//! batstats library - batting statistics from match JSON files
//!
//! Loader → Validator → Aggregator → Presenter. The binary is a thin
//! command-line and terminal UI front end over `pipeline::run`.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod notification;
pub mod pipeline;
pub mod render;
pub mod scroll;
pub mod stats;
pub mod table;
pub mod theme;
pub mod validate;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
pub use error::StatsError;
pub use pipeline::{Report, Settings};
