use serde::Serialize;

use super::StyleMap;
use crate::editor::EditableCell;
use crate::matrix::DataMatrix;

/// Fully resolved table, ready for a renderer to walk.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTable {
    pub numrows: u32,
    pub numcols: u32,
    pub headers: Vec<ColumnHeader>,
    pub rows: Vec<ResolvedRow>,
    /// Set when the input was an error payload; `rows` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Dense data matrix, only when requested through the settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<DataMatrix>,
}

impl ResolvedTable {
    /// Empty table carrying an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Look up an emitted cell. Cells absorbed into a merge are never found.
    pub fn cell(&self, row: u32, col: u32) -> Option<&ResolvedCell> {
        self.rows
            .iter()
            .find(|r| r.row == row)
            .and_then(|r| r.cells.iter().find(|c| c.col == col))
    }

    /// Iterate every editable cell in row-major order.
    pub fn editable_cells(&self) -> impl Iterator<Item = &EditableCell> {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter_map(|c| match &c.content {
                CellContent::Input(input) => Some(input),
                CellContent::Text { .. } => None,
            })
    }
}

/// Column header: letter label plus width style.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub col: u32,
    pub label: String,
    pub style: StyleMap,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRow {
    pub row: u32,
    pub style: StyleMap,
    pub cells: Vec<ResolvedCell>,
}

/// Everything a renderer needs for one `<td>`.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCell {
    pub row: u32,
    pub col: u32,
    /// "A1"-style address of this cell.
    pub address: String,
    pub style: StyleMap,
    /// Present only on the anchor cell of a merge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<CellSpan>,
    /// Tooltip text (the cell note).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: CellContent,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellSpan {
    pub rowspan: u32,
    pub colspan: u32,
}

#[derive(Debug, Serialize, Clone)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellContent {
    /// Read-only text, split into styled fragments.
    Text { fragments: Vec<TextFragment> },
    /// Numeric input for an editable cell.
    Input(EditableCell),
}

impl CellContent {
    /// Concatenated fragment text; the display value for inputs.
    pub fn text(&self) -> String {
        match self {
            CellContent::Text { fragments } => fragments.iter().map(|f| f.text.as_str()).collect(),
            CellContent::Input(input) => input.display.clone(),
        }
    }
}

/// A contiguous slice of a cell's display text with its own style.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    pub text: String,
    pub style: StyleMap,
    /// When set the fragment renders as a link opening in a new window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TextFragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: StyleMap::new(),
            link: None,
        }
    }

    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }
}
