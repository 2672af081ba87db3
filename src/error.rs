//! Error types for adv-qc operations.
//!
//! Defines error types for each subsystem:
//! - Individual quality checks
//! - Check dispatch
//! - Chunk construction, loading and windowing
//! - Run configuration

use thiserror::Error;

/// Errors raised from inside a single quality check.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Column '{0}' not found in chunk")]
    MissingColumn(String),

    #[error("Column '{0}' has no samples")]
    EmptySeries(String),

    #[error("Column '{0}' has no non-missing samples")]
    NoValidSamples(String),

    #[error("Column '{0}' contains missing samples")]
    MissingValues(String),

    #[error("No reference velocity provider configured")]
    MissingReferenceVelocity,
}

/// Errors that can occur while dispatching checks over a chunk.
///
/// Both the unknown-name and failed-check variants list every available
/// check so the caller can correct the request.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write diagnostics: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown check '{name}'. Available checks:\n{available}")]
    UnknownCheck { name: String, available: String },

    #[error("Check '{name}' could not be run: {source}. Available checks:\n{available}")]
    CheckFailed {
        name: String,
        available: String,
        #[source]
        source: CheckError,
    },
}

impl DispatchError {
    /// Name of the check that caused the error, if any.
    pub fn check_name(&self) -> Option<&str> {
        match self {
            DispatchError::InvalidArgument(_) | DispatchError::Io(_) => None,
            DispatchError::UnknownCheck { name, .. } | DispatchError::CheckFailed { name, .. } => {
                Some(name)
            }
        }
    }
}

/// Errors that can occur while building, loading or windowing chunks.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Column '{0}' not found in table")]
    MissingColumn(String),

    #[error("Invalid window index {value} at row {row}: must be a whole number")]
    InvalidWindowIndex { row: usize, value: f64 },

    #[error("Unsupported table format '{0}': expected .json, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can occur while loading a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
