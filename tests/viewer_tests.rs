//! End-to-end tests for table resolution.
//!
//! Feeds whole `spreadsheets.get` payloads (and the two error payload shapes)
//! through `TableView` and checks the resolved table.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;
mod fixtures;

use common::{decode, emitted_cols, get_cell, resolve, resolve_with, to_json};
use fixtures::{api_error, transport_error, CellBuilder, SheetBuilder};
use serde_json::json;
use sheetgrid::{GridError, TableData, TableSettings};
use test_case::test_case;

// ============================================================================
// TABLE SHAPE
// ============================================================================

#[test]
fn test_headers_and_rows() {
    let json = SheetBuilder::new()
        .row(vec![CellBuilder::text("a"), CellBuilder::text("b")])
        .row(vec![CellBuilder::text("c")])
        .build();
    let table = resolve(&json);

    assert_eq!((table.numrows, table.numcols), (2, 2));
    let labels: Vec<&str> = table.headers.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B"]);

    // Short rows are padded to the full width
    assert_eq!(emitted_cols(&table, 1), vec![0, 1]);
    assert_eq!(get_cell(&table, 1, 1).address, "B2");
    assert_eq!(get_cell(&table, 1, 0).content.text(), "c");
}

#[test]
fn test_precomputed_size_beyond_source_rows() {
    let json = SheetBuilder::new()
        .row(vec![CellBuilder::text("a")])
        .row_heights(&[21, 21, 21])
        .column_widths(&[100, 100])
        .size(3, 2)
        .build();
    let table = resolve(&json);

    assert_eq!((table.numrows, table.numcols), (3, 2));
    assert_eq!(table.headers.len(), 2);
    // Rows without a source entry are not emitted
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn test_oversized_precomputed_size_is_capped() {
    let json = SheetBuilder::new()
        .row(vec![CellBuilder::text("a"), CellBuilder::text("b")])
        .column_widths(&[100, 100, 100])
        .size(4_000_000_000, 4_000_000_000)
        .build();
    let table = resolve(&json);

    assert_eq!((table.numrows, table.numcols), (1, 3));
    assert_eq!(table.headers.len(), 3);
    assert_eq!(emitted_cols(&table, 0), vec![0, 1, 2]);
}

#[test]
fn test_zero_precomputed_size_falls_back_to_inference() {
    let json = SheetBuilder::new()
        .row(vec![CellBuilder::text("a"), CellBuilder::text("b")])
        .size(0, 0)
        .build();
    let table = resolve(&json);
    assert_eq!((table.numrows, table.numcols), (1, 2));
}

#[test]
fn test_empty_spreadsheet() {
    let table = resolve(&json!({ "sheets": [] }));
    assert_eq!((table.numrows, table.numcols), (0, 0));
    assert!(table.rows.is_empty());
    assert!(table.headers.is_empty());
    assert!(!table.is_error());
}

#[test]
fn test_only_first_sheet_is_rendered() {
    let mut json = SheetBuilder::new()
        .row(vec![CellBuilder::text("first")])
        .build();
    json["sheets"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "data": [{ "rowData": [{ "values": [{ "formattedValue": "second" }] }] }] }));

    let table = resolve(&json);
    assert_eq!(get_cell(&table, 0, 0).content.text(), "first");
}

#[test]
fn test_resolved_json_shape() {
    let json = SheetBuilder::new()
        .row(vec![CellBuilder::text("hi").note("n")])
        .build();
    let out = to_json(&resolve(&json));

    assert_eq!(out["numrows"], 1);
    assert_eq!(out["headers"][0]["label"], "A");
    let cell = &out["rows"][0]["cells"][0];
    assert_eq!(cell["address"], "A1");
    assert_eq!(cell["title"], "n");
    assert_eq!(cell["content"]["kind"], "text");
    assert_eq!(cell["content"]["fragments"][0]["text"], "hi");
    assert!(out.get("error").is_none());
}

#[test]
fn test_matrix_setting_recomputes_size() {
    let json = SheetBuilder::new()
        .row(vec![CellBuilder::text("a")])
        .size(5, 5)
        .build();
    let table = resolve_with(
        &json,
        TableSettings {
            create_matrix: true,
            ..TableSettings::default()
        },
    );
    assert_eq!((table.numrows, table.numcols), (1, 1));
}

// ============================================================================
// ERROR PAYLOADS
// ============================================================================

#[test]
fn test_api_error_payload() {
    let json = api_error(403, "The caller does not have permission", "PERMISSION_DENIED");
    let data = decode(&json);
    assert!(matches!(data, TableData::ApiError(_)));

    let table = resolve(&json);
    assert!(table.is_error());
    assert_eq!(
        table.error.as_deref(),
        Some("The caller does not have permission")
    );
    assert!(table.rows.is_empty());
    assert_eq!(to_json(&table)["error"], "The caller does not have permission");
}

#[test]
fn test_api_error_falls_back_to_status() {
    let table = resolve(&json!({ "error": { "code": 404, "status": "NOT_FOUND" } }));
    assert_eq!(table.error.as_deref(), Some("NOT_FOUND"));
}

#[test]
fn test_transport_error_payload() {
    let table = resolve(&transport_error("ECONNREFUSED", "connect", None));
    assert_eq!(table.error.as_deref(), Some("ECONNREFUSED"));

    let table = resolve(&transport_error(
        "ENOTFOUND",
        "getaddrinfo",
        Some("getaddrinfo ENOTFOUND sheets.googleapis.com"),
    ));
    assert_eq!(
        table.error.as_deref(),
        Some("getaddrinfo ENOTFOUND sheets.googleapis.com")
    );
}

#[test_case(
    json!({ "error": "invalid_grant", "error_description": "Bad Request" }),
    "Bad Request" ;
    "oauth string error with description"
)]
#[test_case(json!({ "error": "invalid_grant" }), "invalid_grant" ; "oauth string error alone")]
#[test_case(
    json!({ "error": { "code": "403", "message": "denied" } }),
    "denied" ;
    "api error with string code"
)]
#[test_case(json!({ "error": { "code": "403" } }), "403" ; "api error code only")]
#[test_case(
    json!({ "code": 500, "message": "Internal error" }),
    "Internal error" ;
    "transport error with numeric code"
)]
#[test_case(json!({ "code": 500 }), "500" ; "transport numeric code only")]
fn test_loosely_typed_error_payloads(payload: serde_json::Value, expected: &str) {
    let data = TableData::from_json(&payload.to_string()).unwrap();
    assert!(data.is_error());

    let table = resolve(&payload);
    assert!(table.rows.is_empty());
    assert_eq!(table.error.as_deref(), Some(expected));
}

#[test]
fn test_error_payload_into_spreadsheet() {
    let data = decode(&api_error(500, "backend error", "INTERNAL"));
    match data.into_spreadsheet() {
        Err(GridError::Input { message }) => assert_eq!(message, "backend error"),
        other => panic!("expected input error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(matches!(
        TableData::from_json("{not json"),
        Err(GridError::Json(_))
    ));
    assert!(TableData::from_json("\"just a string\"").is_err());
}
