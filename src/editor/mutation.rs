//! Applies user input on an editable cell to the pending edits.

use serde::Serialize;

use super::input::{clean_numeric_input, EditableCell};
use super::PendingEdits;

/// Outcome of one input change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputChange {
    /// Cleaned text to put back into the input.
    pub value: String,
    /// Whether the cell now differs from its original value.
    pub dirty: bool,
}

/// Clean `raw`, compare it with the cell's original value and add, update or
/// remove the cell's pending edit accordingly.
///
/// Empty or unparsable text (`"-"`, `"."`) counts as 0. The comparison is
/// done in display units; percent values are stored as fractions.
#[allow(clippy::float_cmp)]
pub fn record_input(pending: &mut PendingEdits, cell: &EditableCell, raw: &str) -> InputChange {
    let value = clean_numeric_input(raw);
    let entered: f64 = value.parse().unwrap_or(0.0);

    let dirty = entered != cell.original;
    if dirty {
        pending.add_or_update(&cell.address, cell.kind.stored_value(entered));
    } else {
        pending.remove(&cell.address);
    }

    InputChange { value, dirty }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::editor::InputKind;

    fn editable(kind: InputKind, original: f64) -> EditableCell {
        EditableCell {
            kind,
            original,
            display: original.to_string(),
            ..EditableCell::new("B2".into(), 1, 1, None)
        }
    }

    #[test]
    fn test_changed_value_is_recorded() {
        let mut pending = PendingEdits::new();
        let cell = editable(InputKind::Plain, 10.0);

        let change = record_input(&mut pending, &cell, "12a");
        assert_eq!(change.value, "12");
        assert!(change.dirty);
        assert_eq!(pending.get("B2"), Some(12.0));
    }

    #[test]
    fn test_revert_removes_edit() {
        let mut pending = PendingEdits::new();
        let cell = editable(InputKind::Plain, 10.0);

        record_input(&mut pending, &cell, "11");
        record_input(&mut pending, &cell, "12");
        assert_eq!(pending.len(), 1);

        let change = record_input(&mut pending, &cell, "10");
        assert!(!change.dirty);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_percent_stored_as_fraction() {
        let mut pending = PendingEdits::new();
        let cell = editable(InputKind::Percent, 50.0);

        record_input(&mut pending, &cell, "25%");
        assert_eq!(pending.get("B2"), Some(0.25));
    }

    #[test]
    fn test_empty_and_partial_input_count_as_zero() {
        let mut pending = PendingEdits::new();
        let zero = editable(InputKind::Plain, 0.0);

        assert!(!record_input(&mut pending, &zero, "").dirty);
        assert!(!record_input(&mut pending, &zero, "-").dirty);
        assert!(pending.is_empty());

        let five = editable(InputKind::Plain, 5.0);
        let change = record_input(&mut pending, &five, ".");
        assert!(change.dirty);
        assert_eq!(pending.get("B2"), Some(0.0));
    }
}
