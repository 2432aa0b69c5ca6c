use thiserror::Error;

/// Everything that can go wrong between reading a source and showing the table.
///
/// Per-source variants carry the source name so they can be listed after the
/// run; the pipeline drops the source and keeps going. `NoInput`,
/// `NoValidData` and `WorkerPool` stop the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Error reading {name}: {message}")]
    Io { name: String, message: String },

    #[error("Error reading {name}: invalid JSON: {message}")]
    InvalidJson { name: String, message: String },

    #[error("Error reading {name}: {message}")]
    UnsupportedShape { name: String, message: String },

    #[error("{path} is not a JSON file or a folder")]
    InvalidPath { path: String },

    #[error("{name} has no '{column}' column")]
    MissingColumn { name: String, column: String },

    #[error("{name}: column '{column}' holds {found} values, expected {expected}")]
    ColumnType {
        name: String,
        column: String,
        expected: String,
        found: String,
    },

    #[error("No files uploaded or specified.")]
    NoInput,

    #[error("No valid data found in the specified sources.")]
    NoValidData,

    #[error("Failed to start loader pool: {0}")]
    WorkerPool(String),
}
