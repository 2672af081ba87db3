//! Slicing a continuous table into per-window chunks.

use std::collections::BTreeMap;

use tracing::warn;

use super::Chunk;
use crate::error::ChunkError;

/// One window of a continuous series.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Value of the grouping column for this window.
    pub index: i64,
    /// Rows belonging to the window, without the grouping column.
    pub chunk: Chunk,
}

/// Groups the rows of `table` by the whole-number value of `column`.
///
/// Windows are returned in ascending index order and rows keep their
/// original order within a window. Rows with a missing index are dropped.
pub fn split_windows(table: &Chunk, column: &str) -> Result<Vec<Window>, ChunkError> {
    let index = table
        .get(column)
        .ok_or_else(|| ChunkError::MissingColumn(column.to_string()))?;

    let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    let mut dropped = 0usize;
    for (row, &value) in index.iter().enumerate() {
        if value.is_nan() {
            dropped += 1;
            continue;
        }
        if value.fract() != 0.0 || !value.is_finite() {
            return Err(ChunkError::InvalidWindowIndex { row, value });
        }
        groups.entry(value as i64).or_default().push(row);
    }

    if dropped > 0 {
        warn!(column, dropped, "Dropped rows with missing window index");
    }

    groups
        .into_iter()
        .map(|(idx, rows)| {
            let mut chunk = Chunk::new();
            for (name, values) in table.columns() {
                if name == column {
                    continue;
                }
                chunk.insert_column(name.clone(), values.select(ndarray::Axis(0), &rows))?;
            }
            Ok(Window { index: idx, chunk })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::columns;

    fn create_table() -> Chunk {
        Chunk::from_columns([
            (columns::WINDOW_INDEX, vec![2.0, 1.0, 2.0, f64::NAN, 1.0]),
            (columns::VELOCITY_Z, vec![0.1, 0.2, 0.3, 0.4, 0.5]),
        ])
        .expect("valid table")
    }

    #[test]
    fn test_split_windows_groups_and_orders() {
        let windows = split_windows(&create_table(), columns::WINDOW_INDEX).expect("split");

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].index, 1);
        assert_eq!(windows[1].index, 2);

        let first = windows[0].chunk.column(columns::VELOCITY_Z).expect("present");
        assert_eq!(first.to_vec(), vec![0.2, 0.5]);
        let second = windows[1].chunk.column(columns::VELOCITY_Z).expect("present");
        assert_eq!(second.to_vec(), vec![0.1, 0.3]);
    }

    #[test]
    fn test_split_windows_drops_grouping_column() {
        let windows = split_windows(&create_table(), columns::WINDOW_INDEX).expect("split");
        assert!(windows
            .iter()
            .all(|w| !w.chunk.has_column(columns::WINDOW_INDEX)));
    }

    #[test]
    fn test_split_windows_missing_column() {
        let err = split_windows(&create_table(), "burst").unwrap_err();
        assert!(matches!(err, ChunkError::MissingColumn(ref c) if c == "burst"));
    }

    #[test]
    fn test_split_windows_fractional_index() {
        let table = Chunk::from_columns([(columns::WINDOW_INDEX, vec![1.0, 1.5])]).expect("ok");
        let err = split_windows(&table, columns::WINDOW_INDEX).unwrap_err();
        assert!(matches!(err, ChunkError::InvalidWindowIndex { row: 1, .. }));
    }
}
