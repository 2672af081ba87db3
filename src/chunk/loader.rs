//! Loading column-oriented tables from JSON or YAML files.
//!
//! The expected document is an object mapping column names to arrays of
//! numbers, with `null` marking a missing sample:
//!
//! ```json
//! { "window.idx": [1, 1, 2], "velocity.Z": [0.01, null, -0.02] }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::Chunk;
use crate::error::ChunkError;

type RawTable = BTreeMap<String, Vec<Option<f64>>>;

/// Loads a table from `path`, choosing the parser from the file extension.
pub fn load_table(path: &Path) -> Result<Chunk, ChunkError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let content = match extension.as_str() {
        "json" | "yaml" | "yml" => fs::read_to_string(path)?,
        _ => return Err(ChunkError::UnsupportedFormat(path.display().to_string())),
    };

    let table = if extension == "json" {
        parse_json(&content)?
    } else {
        parse_yaml(&content)?
    };

    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.column_names().count(),
        "Loaded table"
    );
    Ok(table)
}

/// Parses a column-oriented JSON document.
pub fn parse_json(content: &str) -> Result<Chunk, ChunkError> {
    let raw: RawTable = serde_json::from_str(content)?;
    into_chunk(raw)
}

/// Parses a column-oriented YAML document.
pub fn parse_yaml(content: &str) -> Result<Chunk, ChunkError> {
    let raw: RawTable = serde_yaml::from_str(content)?;
    into_chunk(raw)
}

fn into_chunk(raw: RawTable) -> Result<Chunk, ChunkError> {
    Chunk::from_columns(raw.into_iter().map(|(name, values)| {
        let values = values
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect::<Vec<_>>();
        (name, values)
    }))
}
