//! Row heights and column widths from dimension metadata.

use crate::types::{DimensionProperties, Spreadsheet, StyleMap};

/// Borrowed row/column sizing for one grid. Missing entries mean "no size".
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetDimensions<'a> {
    rows: &'a [DimensionProperties],
    cols: &'a [DimensionProperties],
}

impl<'a> SheetDimensions<'a> {
    pub fn new(rows: &'a [DimensionProperties], cols: &'a [DimensionProperties]) -> Self {
        Self { rows, cols }
    }

    pub fn from_spreadsheet(sheet: &'a Spreadsheet) -> Self {
        Self::new(sheet.row_metadata(), sheet.column_metadata())
    }

    pub fn row(&self, row: u32) -> Option<&'a DimensionProperties> {
        self.rows.get(row as usize)
    }

    pub fn col(&self, col: u32) -> Option<&'a DimensionProperties> {
        self.cols.get(col as usize)
    }
}

/// `height` of a table row; absent metadata means `0px`.
pub fn row_style(meta: Option<&DimensionProperties>) -> StyleMap {
    let mut style = StyleMap::new();
    style.set("height", px(meta.map_or(0.0, DimensionProperties::pixels)));
    style
}

/// `width` of a column header; absent metadata means `0px`.
pub fn column_style(meta: Option<&DimensionProperties>) -> StyleMap {
    let mut style = StyleMap::new();
    style.set("width", px(meta.map_or(0.0, DimensionProperties::pixels)));
    style
}

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
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

    fn size(px: f64) -> DimensionProperties {
        DimensionProperties {
            pixel_size: Some(px),
            ..DimensionProperties::default()
        }
    }

    #[test]
    fn test_row_and_column_style() {
        assert_eq!(row_style(Some(&size(21.0))).get("height"), Some("21px"));
        assert_eq!(column_style(Some(&size(100.0))).get("width"), Some("100px"));
        assert_eq!(row_style(None).get("height"), Some("0px"));
        assert_eq!(
            column_style(Some(&DimensionProperties::default())).get("width"),
            Some("0px")
        );
    }

    #[test]
    fn test_lookup_out_of_range() {
        let rows = [size(10.0)];
        let dims = SheetDimensions::new(&rows, &[]);
        assert!(dims.row(0).is_some());
        assert!(dims.row(1).is_none());
        assert!(dims.col(0).is_none());
    }
}
