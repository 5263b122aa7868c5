//! Test fixtures for generating Sheets API payloads in memory.
//!
//! This module provides builders for creating `spreadsheets.get` JSON
//! responses programmatically, useful for testing table resolution with
//! known inputs.
//!
//! # Example
//!
//! ```rust,ignore
//! use fixtures::{CellBuilder, SheetBuilder};
//!
//! let json = SheetBuilder::new()
//!     .row(vec![CellBuilder::text("Hello").bold(), CellBuilder::number(42.0)])
//!     .merge(0, 1, 0, 2)
//!     .build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use serde_json::{json, Map, Value};

// ============================================================================
// Cell Builder
// ============================================================================

/// Builder for one `CellData` entry.
#[derive(Debug, Clone, Default)]
pub struct CellBuilder {
    formatted: Option<String>,
    number: Option<f64>,
    note: Option<String>,
    format: Map<String, Value>,
    text_format: Map<String, Value>,
    borders: Map<String, Value>,
    runs: Vec<Value>,
}

impl CellBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell showing `text`.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            formatted: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// Numeric cell; the formatted value is the number's display.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self {
            formatted: Some(value.to_string()),
            number: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn formatted(mut self, text: &str) -> Self {
        self.formatted = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    #[must_use]
    pub fn number_format(mut self, kind: &str, pattern: Option<&str>) -> Self {
        let mut nf = json!({ "type": kind });
        if let Some(p) = pattern {
            nf["pattern"] = json!(p);
        }
        self.format.insert("numberFormat".into(), nf);
        self
    }

    #[must_use]
    pub fn currency(self) -> Self {
        self.number_format("CURRENCY", Some("\"$\"#,##0.00"))
    }

    #[must_use]
    pub fn percent(self) -> Self {
        self.number_format("PERCENT", Some("0.00%"))
    }

    /// Legacy `backgroundColor`.
    #[must_use]
    pub fn background(mut self, r: f64, g: f64, b: f64) -> Self {
        self.format.insert(
            "backgroundColor".into(),
            json!({ "red": r, "green": g, "blue": b }),
        );
        self
    }

    /// Structured `backgroundColorStyle.rgbColor`.
    #[must_use]
    pub fn background_style(mut self, r: f64, g: f64, b: f64) -> Self {
        self.format.insert(
            "backgroundColorStyle".into(),
            json!({ "rgbColor": { "red": r, "green": g, "blue": b } }),
        );
        self
    }

    #[must_use]
    pub fn align(mut self, horizontal: &str, vertical: &str) -> Self {
        self.format
            .insert("horizontalAlignment".into(), json!(horizontal));
        self.format.insert("verticalAlignment".into(), json!(vertical));
        self
    }

    #[must_use]
    pub fn wrap(mut self, strategy: &str) -> Self {
        self.format.insert("wrapStrategy".into(), json!(strategy));
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Value) -> Self {
        self.format.insert("padding".into(), padding);
        self
    }

    /// Border side with an RGB color style.
    #[must_use]
    pub fn border(mut self, side: &str, style: &str, width: f64, rgb: [f64; 3]) -> Self {
        self.borders.insert(
            side.into(),
            json!({
                "style": style,
                "width": width,
                "colorStyle": { "rgbColor": { "red": rgb[0], "green": rgb[1], "blue": rgb[2] } }
            }),
        );
        self
    }

    /// Border side without any color.
    #[must_use]
    pub fn border_no_color(mut self, side: &str, style: &str, width: f64) -> Self {
        self.borders
            .insert(side.into(), json!({ "style": style, "width": width }));
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.text_format.insert("bold".into(), json!(true));
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.text_format.insert("italic".into(), json!(true));
        self
    }

    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.text_format.insert("strikethrough".into(), json!(true));
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.text_format.insert("underline".into(), json!(true));
        self
    }

    #[must_use]
    pub fn font(mut self, family: &str, size: f64) -> Self {
        self.text_format.insert("fontFamily".into(), json!(family));
        self.text_format.insert("fontSize".into(), json!(size));
        self
    }

    #[must_use]
    pub fn color(mut self, r: f64, g: f64, b: f64) -> Self {
        self.text_format.insert(
            "foregroundColorStyle".into(),
            json!({ "rgbColor": { "red": r, "green": g, "blue": b } }),
        );
        self
    }

    /// Add a text format run starting at `start` (UTF-16 units).
    #[must_use]
    pub fn run(mut self, start: u32, format: Value) -> Self {
        self.runs.push(json!({ "startIndex": start, "format": format }));
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        let mut cell = Map::new();
        if let Some(f) = self.formatted {
            cell.insert("formattedValue".into(), json!(f));
        }
        if let Some(n) = self.number {
            cell.insert("effectiveValue".into(), json!({ "numberValue": n }));
            cell.insert("userEnteredValue".into(), json!({ "numberValue": n }));
        }
        if let Some(n) = self.note {
            cell.insert("note".into(), json!(n));
        }

        let mut format = self.format;
        if !self.text_format.is_empty() {
            format.insert("textFormat".into(), Value::Object(self.text_format));
        }
        if !self.borders.is_empty() {
            format.insert("borders".into(), Value::Object(self.borders));
        }
        if !format.is_empty() {
            cell.insert("effectiveFormat".into(), Value::Object(format));
        }
        if !self.runs.is_empty() {
            cell.insert("textFormatRuns".into(), Value::Array(self.runs));
        }

        Value::Object(cell)
    }
}

// ============================================================================
// Sheet Builder
// ============================================================================

/// Builder for a single-sheet `spreadsheets.get` response.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    rows: Vec<Value>,
    merges: Vec<Value>,
    row_metadata: Vec<Value>,
    column_metadata: Vec<Value>,
    numrows: Option<u32>,
    numcols: Option<u32>,
}

impl SheetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn row(mut self, cells: Vec<CellBuilder>) -> Self {
        let values: Vec<Value> = cells.into_iter().map(CellBuilder::build).collect();
        self.rows.push(json!({ "values": values }));
        self
    }

    /// Row of raw cell JSON, for shapes the cell builder cannot express
    /// (such as `{}` placeholders).
    #[must_use]
    pub fn raw_row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(json!({ "values": values }));
        self
    }

    /// Row entry with no `values` key.
    #[must_use]
    pub fn empty_row(mut self) -> Self {
        self.rows.push(json!({}));
        self
    }

    /// Half-open merge `[start_row, end_row) x [start_col, end_col)`.
    #[must_use]
    pub fn merge(mut self, start_row: u32, end_row: u32, start_col: u32, end_col: u32) -> Self {
        self.merges.push(json!({
            "sheetId": 0,
            "startRowIndex": start_row,
            "endRowIndex": end_row,
            "startColumnIndex": start_col,
            "endColumnIndex": end_col
        }));
        self
    }

    #[must_use]
    pub fn raw_merge(mut self, merge: Value) -> Self {
        self.merges.push(merge);
        self
    }

    #[must_use]
    pub fn row_heights(mut self, heights: &[u32]) -> Self {
        self.row_metadata = heights.iter().map(|h| json!({ "pixelSize": h })).collect();
        self
    }

    #[must_use]
    pub fn column_widths(mut self, widths: &[u32]) -> Self {
        self.column_metadata = widths.iter().map(|w| json!({ "pixelSize": w })).collect();
        self
    }

    /// Precomputed grid size sent alongside the sheet.
    #[must_use]
    pub fn size(mut self, numrows: u32, numcols: u32) -> Self {
        self.numrows = Some(numrows);
        self.numcols = Some(numcols);
        self
    }

    #[must_use]
    pub fn build(self) -> Value {
        let mut root = json!({
            "sheets": [{
                "properties": { "sheetId": 0, "title": "Sheet1" },
                "data": [{
                    "startRow": 0,
                    "startColumn": 0,
                    "rowData": self.rows,
                    "rowMetadata": self.row_metadata,
                    "columnMetadata": self.column_metadata
                }],
                "merges": self.merges
            }]
        });
        if let Some(n) = self.numrows {
            root["numrows"] = json!(n);
        }
        if let Some(n) = self.numcols {
            root["numcols"] = json!(n);
        }
        root
    }

    #[must_use]
    pub fn build_string(self) -> String {
        self.build().to_string()
    }
}

// ============================================================================
// Error Payloads
// ============================================================================

/// Error body as returned by the Sheets API.
#[must_use]
pub fn api_error(code: u16, message: &str, status: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": status } })
}

/// Error object produced by the HTTP layer.
#[must_use]
pub fn transport_error(code: &str, syscall: &str, message: Option<&str>) -> Value {
    let mut err = json!({ "code": code, "errno": -3008, "syscall": syscall });
    if let Some(m) = message {
        err["message"] = json!(m);
    }
    err
}
