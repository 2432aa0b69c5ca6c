// Configuration type definitions

use serde::Deserialize;

use crate::render::OutputFormat;

/// Column names the pipeline reads
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnsConfig {
    /// Player identifier column ("batsman" in older data, "batter" in newer)
    #[serde(default = "default_player_column")]
    pub player: String,
    #[serde(default = "default_runs_column")]
    pub runs: String,
    #[serde(default = "default_balls_column")]
    pub balls: String,
}

fn default_player_column() -> String {
    "batsman".to_string()
}

fn default_runs_column() -> String {
    "runs".to_string()
}

fn default_balls_column() -> String {
    "balls".to_string()
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        ColumnsConfig {
            player: default_player_column(),
            runs: default_runs_column(),
            balls: default_balls_column(),
        }
    }
}

/// Loader configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct LoaderConfig {
    /// Worker threads; 0 means one per available core
    #[serde(default)]
    pub threads: usize,
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimals for average and strike rate
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

/// Interactive UI configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct UiConfig {
    /// Folder pre-filled in the path input
    #[serde(default)]
    pub folder: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub columns: ColumnsConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
