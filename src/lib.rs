//! sheetgrid - Google Sheets grid data to a renderable table model
//!
//! Turns the sparse `spreadsheets.get` grid payload into a dense, per-cell
//! presentation model:
//! - Merge participation and spans (absorbed cells produce nothing)
//! - CSS style maps from cell formats, borders, padding and sizing
//! - Styled text fragments from per-character format runs
//! - Numeric inputs for editable cells, with dirty-edit tracking that yields
//!   a `values.batchUpdate`-ready submission list
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { resolve_table } from 'sheetgrid';
//! await init();
//! const table = JSON.parse(resolve_table(JSON.stringify(response)));
//! ```

pub mod cell_ref;
pub mod color;
pub mod editor;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod rich_text;
pub mod styles;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{GridError, Result};
pub use viewer::{EditablePolicy, TableContext, TableSettings, TableView};

pub use types::*;

/// Resolve a Sheets JSON payload with default (read-only) settings and return
/// the resolved table as JSON.
///
/// # Errors
/// Returns an error if the payload is not valid JSON. Error payloads from the
/// API resolve to an empty table with its `error` field set.
#[wasm_bindgen]
pub fn resolve_table(json: &str) -> std::result::Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let data = TableData::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let table = TableView::default().resolve(&data);

    serde_json::to_string(&table)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Resolve a Sheets JSON payload and return the table as a `JsValue`.
///
/// # Errors
/// Returns an error if the payload is not valid JSON.
#[wasm_bindgen]
pub fn resolve_table_to_js(
    json: &str,
    editable: bool,
    column_tabbing: bool,
) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let data = TableData::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let settings = TableSettings {
        column_tabbing,
        editable: if editable {
            EditablePolicy::Numeric
        } else {
            EditablePolicy::ReadOnly
        },
        create_matrix: false,
    };
    let table = TableView::new(settings).resolve(&data);

    serde_wasm_bindgen::to_value(&table)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Column number (1-indexed) to letters.
#[must_use]
#[wasm_bindgen]
pub fn column_to_letter(column: i32) -> String {
    cell_ref::column_to_letter(i64::from(column))
}

/// Letters to column number (1-indexed).
///
/// # Errors
/// Returns an error for anything but uppercase `A`–`Z`.
#[wasm_bindgen]
pub fn letter_to_column(letter: &str) -> std::result::Result<f64, JsValue> {
    let column = cell_ref::letter_to_column(letter).map_err(|e| JsValue::from_str(&e.to_string()))?;
    #[allow(clippy::cast_precision_loss)]
    let column = column as f64;
    Ok(column)
}

/// Clean free keyboard input into a numeric string.
#[must_use]
#[wasm_bindgen]
pub fn clean_numeric_input(raw: &str) -> String {
    editor::clean_numeric_input(raw)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
