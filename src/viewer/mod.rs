//! Full-table resolution.
//!
//! `TableView` walks every `(row, col)` of the grid and combines the merge
//! check, the cell style and the cell content into a [`ResolvedTable`].
//! Everything a cell needs is passed explicitly through [`TableContext`].

mod settings;

pub use settings::{EditablePolicy, EditablePredicate, TableSettings};

use crate::cell_ref::{cell_address, column_to_letter};
use crate::editor::{input_style, EditableCell};
use crate::layout::{
    check_merges, column_style, merge_ranges, row_style, MergeRange, SheetDimensions,
};
use crate::matrix::{get_data_size, DataMatrix, DataSize};
use crate::rich_text::cell_fragments;
use crate::styles::cell_style;
use crate::types::{
    CellContent, ColumnHeader, ResolvedCell, ResolvedRow, ResolvedTable, RowData, Spreadsheet,
    TableData,
};

/// Resolves table payloads with fixed settings.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    settings: TableSettings,
}

impl TableView {
    pub fn new(settings: TableSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Resolve a payload. Error payloads give an empty table carrying the
    /// error message.
    pub fn resolve(&self, data: &TableData) -> ResolvedTable {
        match data.spreadsheet() {
            Ok(sheet) => self.resolve_spreadsheet(sheet),
            Err(e) => {
                log::warn!("rendering empty table for error payload: {e}");
                ResolvedTable::error(e.message())
            }
        }
    }

    pub fn resolve_spreadsheet(&self, sheet: &Spreadsheet) -> ResolvedTable {
        let ctx = TableContext::new(sheet, &self.settings);
        let DataSize { numrows, numcols } = ctx.size;

        let headers = (0..numcols)
            .map(|c| ColumnHeader {
                col: c,
                label: column_to_letter(i64::from(c) + 1),
                style: column_style(ctx.dims.col(c)),
            })
            .collect();

        let rows: Vec<ResolvedRow> = (0..numrows)
            .filter(|&r| ctx.row(r).is_some())
            .map(|r| ResolvedRow {
                row: r,
                style: row_style(ctx.dims.row(r)),
                cells: (0..numcols).filter_map(|c| ctx.resolve_cell(r, c)).collect(),
            })
            .collect();

        let matrix = self
            .settings
            .create_matrix
            .then(|| DataMatrix::build(ctx.rows, ctx.size));

        log::debug!(
            "resolved table {numrows}x{numcols}: {} rows emitted, {} merges",
            rows.len(),
            ctx.merges.len()
        );

        ResolvedTable {
            numrows,
            numcols,
            headers,
            rows,
            error: None,
            matrix,
        }
    }
}

/// Per-table inputs shared by every cell resolution.
#[derive(Debug)]
pub struct TableContext<'a> {
    pub settings: &'a TableSettings,
    pub size: DataSize,
    pub rows: &'a [RowData],
    pub dims: SheetDimensions<'a>,
    pub merges: Vec<MergeRange>,
}

impl<'a> TableContext<'a> {
    pub fn new(sheet: &'a Spreadsheet, settings: &'a TableSettings) -> Self {
        let rows = sheet.rows();
        Self {
            settings,
            size: table_size(sheet, settings),
            rows,
            dims: SheetDimensions::from_spreadsheet(sheet),
            merges: merge_ranges(sheet.merges()),
        }
    }

    fn row(&self, row: u32) -> Option<&'a RowData> {
        self.rows.get(row as usize)
    }

    /// Resolve one cell. Returns `None` for cells absorbed into a merge.
    pub fn resolve_cell(&self, row: u32, col: u32) -> Option<ResolvedCell> {
        let merge = check_merges(&self.merges, row, col);
        if merge.is_absorbed() {
            return None;
        }

        let data = self.row(row).and_then(|r| r.cell(col as usize));
        let mut style = cell_style(data, self.dims.row(row), self.dims.col(col));
        let address = cell_address(row, col);

        let content = if self.settings.editable.is_editable(data) {
            let mut input = EditableCell::new(address.clone(), row, col, data);
            input.tab_index = self.settings.tab_index(row, col);
            input.style = input_style(&style, input.kind);
            style.set("padding", "0");
            CellContent::Input(input)
        } else {
            CellContent::Text {
                fragments: cell_fragments(data),
            }
        };

        Some(ResolvedCell {
            row,
            col,
            address,
            style,
            span: merge.span(),
            title: data.and_then(|d| d.note.clone()),
            content,
        })
    }
}

/// Grid size: precomputed sizes when usable, otherwise inferred from rows.
///
/// Precomputed sizes are capped at what the payload can describe: its
/// source rows and cells, or its dimension metadata when that is longer.
fn table_size(sheet: &Spreadsheet, settings: &TableSettings) -> DataSize {
    let inferred = get_data_size(sheet.rows());
    match (sheet.numrows, sheet.numcols) {
        (Some(numrows), Some(numcols))
            if numrows > 0 && numcols > 0 && !settings.create_matrix =>
        {
            let max_rows = inferred.numrows.max(len_u32(sheet.row_metadata().len()));
            let max_cols = inferred.numcols.max(len_u32(sheet.column_metadata().len()));
            if numrows > max_rows || numcols > max_cols {
                log::warn!(
                    "precomputed size {numrows}x{numcols} exceeds payload, capped at {max_rows}x{max_cols}"
                );
            }
            DataSize {
                numrows: numrows.min(max_rows),
                numcols: numcols.min(max_cols),
            }
        }
        _ => inferred,
    }
}

fn len_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
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
    use crate::types::{CellData, DimensionProperties, GridData, GridRange, Sheet};

    fn sheet(rows: Vec<RowData>, merges: Vec<GridRange>) -> Spreadsheet {
        Spreadsheet {
            sheets: vec![Sheet {
                properties: None,
                data: vec![GridData {
                    row_data: rows,
                    ..GridData::default()
                }],
                merges,
            }],
            numrows: None,
            numcols: None,
        }
    }

    fn text_row(values: &[&str]) -> RowData {
        RowData {
            values: Some(
                values
                    .iter()
                    .map(|v| CellData {
                        formatted_value: Some((*v).to_string()),
                        ..CellData::default()
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_absorbed_cells_are_skipped() {
        let merge = GridRange {
            start_row_index: Some(0),
            end_row_index: Some(1),
            start_column_index: Some(0),
            end_column_index: Some(2),
            ..GridRange::default()
        };
        let table = TableView::default()
            .resolve_spreadsheet(&sheet(vec![text_row(&["a", "b", "c"])], vec![merge]));

        let cols: Vec<u32> = table.rows[0].cells.iter().map(|c| c.col).collect();
        assert_eq!(cols, vec![0, 2]);
        assert_eq!(table.rows[0].cells[0].span.map(|s| s.colspan), Some(2));
    }

    #[test]
    fn test_precomputed_size_used() {
        let mut s = sheet(vec![text_row(&["a"])], vec![]);
        s.sheets[0].data[0].row_metadata = vec![DimensionProperties::default(); 2];
        s.sheets[0].data[0].column_metadata = vec![DimensionProperties::default(); 3];
        s.numrows = Some(2);
        s.numcols = Some(3);

        let table = TableView::default().resolve_spreadsheet(&s);
        assert_eq!((table.numrows, table.numcols), (2, 3));
        // Row 1 has no source entry and is omitted
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells.len(), 3);
    }

    #[test]
    fn test_precomputed_size_capped_at_payload() {
        let mut s = sheet(vec![text_row(&["a", "b"])], vec![]);
        s.numrows = Some(4_000_000_000);
        s.numcols = Some(4_000_000_000);

        let table = TableView::default().resolve_spreadsheet(&s);
        assert_eq!((table.numrows, table.numcols), (1, 2));
        assert_eq!(table.headers.len(), 2);
    }

    #[test]
    fn test_create_matrix_recomputes_size() {
        let mut s = sheet(vec![text_row(&["a", "b"])], vec![]);
        s.numrows = Some(9);
        s.numcols = Some(9);

        let view = TableView::new(TableSettings {
            create_matrix: true,
            ..TableSettings::default()
        });
        let table = view.resolve_spreadsheet(&s);
        assert_eq!((table.numrows, table.numcols), (1, 2));
        assert_eq!(table.matrix.map(|m| m.size()), Some(DataSize { numrows: 1, numcols: 2 }));
    }

    #[test]
    fn test_column_tabbing() {
        let view = TableView::new(TableSettings {
            column_tabbing: true,
            editable: EditablePolicy::All,
            ..TableSettings::default()
        });
        let table = view.resolve_spreadsheet(&sheet(vec![text_row(&["1", "2"])], vec![]));
        let tabs: Vec<u32> = table.editable_cells().map(|c| c.tab_index).collect();
        assert_eq!(tabs, vec![0, 1]);
    }
}
