//! Common test utilities and assertion helpers.
//!
//! Helpers for resolving fixture payloads and inspecting the resolved table.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use serde_json::Value;
use sheetgrid::{
    CellContent, EditablePolicy, ResolvedCell, ResolvedTable, StyleMap, TableData, TableSettings,
    TableView, TextFragment,
};

// ============================================================================
// Resolution Helpers
// ============================================================================

/// Decode a fixture payload.
#[must_use]
pub fn decode(json: &Value) -> TableData {
    TableData::from_json(&json.to_string()).expect("Failed to decode payload")
}

/// Resolve a payload with default (read-only) settings.
#[must_use]
pub fn resolve(json: &Value) -> ResolvedTable {
    TableView::default().resolve(&decode(json))
}

/// Resolve a payload with explicit settings.
#[must_use]
pub fn resolve_with(json: &Value, settings: TableSettings) -> ResolvedTable {
    TableView::new(settings).resolve(&decode(json))
}

/// Resolve with every numeric cell editable.
#[must_use]
pub fn resolve_editable(json: &Value) -> ResolvedTable {
    resolve_with(
        json,
        TableSettings {
            editable: EditablePolicy::Numeric,
            ..TableSettings::default()
        },
    )
}

/// Serialize a resolved table for JSON-shape assertions.
#[must_use]
pub fn to_json(table: &ResolvedTable) -> Value {
    serde_json::to_value(table).expect("Failed to serialize table")
}

// ============================================================================
// Lookup Helpers
// ============================================================================

/// Get an emitted cell, panicking with its coordinates when absent.
pub fn get_cell(table: &ResolvedTable, row: u32, col: u32) -> &ResolvedCell {
    table
        .cell(row, col)
        .unwrap_or_else(|| panic!("No cell emitted at ({row}, {col})"))
}

/// Text fragments of a read-only cell.
pub fn fragments(cell: &ResolvedCell) -> &[TextFragment] {
    match &cell.content {
        CellContent::Text { fragments } => fragments,
        CellContent::Input(_) => panic!("Cell {} is an input", cell.address),
    }
}

/// Columns emitted in `row`, in order.
#[must_use]
pub fn emitted_cols(table: &ResolvedTable, row: u32) -> Vec<u32> {
    table
        .rows
        .iter()
        .find(|r| r.row == row)
        .map(|r| r.cells.iter().map(|c| c.col).collect())
        .unwrap_or_default()
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert a style property has the expected value.
pub fn assert_style(style: &StyleMap, property: &str, expected: &str) {
    assert_eq!(
        style.get(property),
        Some(expected),
        "Expected {property}: {expected} in style `{style}`"
    );
}

/// Assert a style property is absent.
pub fn assert_no_style(style: &StyleMap, property: &str) {
    assert!(
        !style.contains(property),
        "Expected no {property} in style `{style}`"
    );
}

/// Assert the property order of a style map.
pub fn assert_style_keys(style: &StyleMap, expected: &[&str]) {
    let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, expected, "Unexpected property order in `{style}`");
}
