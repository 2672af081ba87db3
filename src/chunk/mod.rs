//! Tabular chunk model for ADV bursts.
//!
//! A [`Chunk`] holds named numeric columns of equal length. Missing
//! samples are stored as `NaN`.

pub mod loader;
pub mod window;

use std::collections::BTreeMap;

use ndarray::Array1;

use crate::error::{CheckError, ChunkError};

pub use loader::load_table;
pub use window::{split_windows, Window};

/// Well-known column names produced by the instrument loader.
pub mod columns {
    pub const SIGNAL_RATIO_X: &str = "signal.rat.X";
    pub const SIGNAL_RATIO_Y: &str = "signal.rat.Y";
    pub const SIGNAL_RATIO_Z: &str = "signal.rat.Z";

    pub const CORRELATION_X: &str = "correlation.X";
    pub const CORRELATION_Y: &str = "correlation.Y";
    pub const CORRELATION_Z: &str = "correlation.Z";

    pub const VELOCITY_Z: &str = "velocity.Z";

    /// Default grouping column used to slice a series into windows.
    pub const WINDOW_INDEX: &str = "window.idx";

    pub const SIGNAL_RATIOS: [&str; 3] = [SIGNAL_RATIO_X, SIGNAL_RATIO_Y, SIGNAL_RATIO_Z];
    pub const CORRELATIONS: [&str; 3] = [CORRELATION_X, CORRELATION_Y, CORRELATION_Z];
}

/// One measurement window: named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    columns: BTreeMap<String, Array1<f64>>,
    rows: usize,
}

impl Chunk {
    /// Creates an empty chunk with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chunk from `(name, values)` pairs.
    ///
    /// Fails if the columns disagree on length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, ChunkError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut chunk = Self::new();
        for (name, values) in columns {
            chunk.insert_column(name, Array1::from(values))?;
        }
        Ok(chunk)
    }

    /// Adds a column, consuming and returning the chunk.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, ChunkError> {
        self.insert_column(name, Array1::from(values))?;
        Ok(self)
    }

    /// Inserts or replaces a column.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Array1<f64>,
    ) -> Result<(), ChunkError> {
        let name = name.into();
        let replacing_only_column = self.columns.len() == 1 && self.columns.contains_key(&name);
        if !self.columns.is_empty() && !replacing_only_column && values.len() != self.rows {
            return Err(ChunkError::LengthMismatch {
                column: name,
                expected: self.rows,
                actual: values.len(),
            });
        }
        self.rows = values.len();
        self.columns.insert(name, values);
        Ok(())
    }

    /// Returns the named column, or `CheckError::MissingColumn`.
    pub fn column(&self, name: &str) -> Result<&Array1<f64>, CheckError> {
        self.columns
            .get(name)
            .ok_or_else(|| CheckError::MissingColumn(name.to_string()))
    }

    /// Returns the named column if present.
    pub fn get(&self, name: &str) -> Option<&Array1<f64>> {
        self.columns.get(name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }

    /// Number of rows (samples).
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub(crate) fn columns(&self) -> &BTreeMap<String, Array1<f64>> {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns() {
        let chunk = Chunk::from_columns([
            (columns::VELOCITY_Z, vec![1.0, 2.0, 3.0]),
            (columns::CORRELATION_X, vec![90.0, f64::NAN, 95.0]),
        ])
        .expect("columns have equal length");

        assert_eq!(chunk.len(), 3);
        assert!(chunk.has_column(columns::VELOCITY_Z));
        assert!(chunk.column(columns::CORRELATION_X).expect("present")[1].is_nan());
    }

    #[test]
    fn test_length_mismatch() {
        let result = Chunk::new()
            .with_column("a", vec![1.0, 2.0])
            .and_then(|c| c.with_column("b", vec![1.0]));

        match result {
            Err(ChunkError::LengthMismatch {
                column,
                expected,
                actual,
            }) => {
                assert_eq!(column, "b");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_replace_only_column_changes_length() {
        let mut chunk = Chunk::new().with_column("a", vec![1.0, 2.0]).expect("ok");
        chunk
            .insert_column("a", Array1::from(vec![1.0, 2.0, 3.0]))
            .expect("replacing the only column may change the row count");
        assert_eq!(chunk.len(), 3);
    }

    #[test]
    fn test_missing_column() {
        let chunk = Chunk::new();
        let err = chunk.column(columns::VELOCITY_Z).unwrap_err();
        assert!(matches!(err, CheckError::MissingColumn(ref c) if c == "velocity.Z"));
    }

    #[test]
    fn test_column_names_sorted() {
        let chunk = Chunk::from_columns([("b", vec![1.0]), ("a", vec![2.0])]).expect("ok");
        let names: Vec<&str> = chunk.column_names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
