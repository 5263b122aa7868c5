//! Sparse-to-dense conversion of source rows.
//!
//! Source rows are ragged: a row may omit `values` or stop early. The dense
//! matrix pads every row to the widest one with explicit empty entries.

use serde::Serialize;

use crate::types::{CellData, RowData};

/// Row and column counts of a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSize {
    pub numrows: u32,
    pub numcols: u32,
}

/// Infer grid size: one row per source row, as many columns as the widest row.
pub fn get_data_size(rows: &[RowData]) -> DataSize {
    let numcols = rows.iter().map(RowData::len).max().unwrap_or(0);
    DataSize {
        numrows: saturating_u32(rows.len()),
        numcols: saturating_u32(numcols),
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Dense, row-major `numrows x numcols` matrix. `None` is the empty marker.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMatrix {
    pub numrows: u32,
    pub numcols: u32,
    pub data: Vec<Vec<Option<CellData>>>,
}

impl DataMatrix {
    /// Build a matrix of exactly `size`, copying whichever source cells exist.
    pub fn build(rows: &[RowData], size: DataSize) -> Self {
        let data = (0..size.numrows as usize)
            .map(|r| {
                let source = rows.get(r);
                (0..size.numcols as usize)
                    .map(|c| source.and_then(|row| row.cell(c)).cloned())
                    .collect()
            })
            .collect();

        Self {
            numrows: size.numrows,
            numcols: size.numcols,
            data,
        }
    }

    /// Build a matrix sized by [`get_data_size`].
    pub fn from_rows(rows: &[RowData]) -> Self {
        Self::build(rows, get_data_size(rows))
    }

    pub fn size(&self) -> DataSize {
        DataSize {
            numrows: self.numrows,
            numcols: self.numcols,
        }
    }

    /// Cell at `(row, col)`; `None` both for empty entries and out-of-range.
    pub fn get(&self, row: u32, col: u32) -> Option<&CellData> {
        self.data
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .and_then(Option::as_ref)
    }

    /// Iterate every position in row-major order with its entry.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Option<&CellData>)> {
        self.data.iter().zip(0u32..).flat_map(|(cells, r)| {
            cells
                .iter()
                .zip(0u32..)
                .map(move |(cell, c)| (r, c, cell.as_ref()))
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn row(n: usize) -> RowData {
        RowData {
            values: Some(
                (0..n)
                    .map(|i| CellData {
                        formatted_value: Some(format!("v{i}")),
                        ..CellData::default()
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_size_uses_widest_row() {
        let rows = vec![row(3), row(1), row(0)];
        assert_eq!(
            get_data_size(&rows),
            DataSize {
                numrows: 3,
                numcols: 3
            }
        );
    }

    #[test]
    fn test_size_counts_rows_without_values() {
        let rows = vec![RowData::default(), row(2)];
        let size = get_data_size(&rows);
        assert_eq!(size.numrows, 2);
        assert_eq!(size.numcols, 2);
    }

    #[test]
    fn test_empty_input() {
        let matrix = DataMatrix::from_rows(&[]);
        assert_eq!(matrix.size(), DataSize::default());
        assert!(matrix.data.is_empty());
    }

    #[test]
    fn test_ragged_rows_padded_with_empty() {
        let rows = vec![row(3), row(1)];
        let matrix = DataMatrix::from_rows(&rows);

        assert_eq!(matrix.data.len(), 2);
        assert!(matrix.data.iter().all(|r| r.len() == 3));
        assert_eq!(
            matrix.get(1, 0).and_then(|c| c.formatted_value.as_deref()),
            Some("v0")
        );
        assert!(matrix.get(1, 2).is_none());
        assert!(matrix.get(5, 5).is_none());
        assert_eq!(matrix.iter().count(), 6);
    }

    #[test]
    fn test_explicit_size_larger_than_source() {
        let matrix = DataMatrix::build(
            &[row(1)],
            DataSize {
                numrows: 2,
                numcols: 2,
            },
        );
        let present: Vec<bool> = matrix.iter().map(|(_, _, c)| c.is_some()).collect();
        assert_eq!(present, vec![true, false, false, false]);
    }
}
