//! Pending-edit tracking for editable cells.
//!
//! - `input`: numeric input cleaning and the editable-cell model
//! - `mutation`: applying a keystroke's value to the pending edits
//!
//! Pending edits are keyed by cell address, so each address holds at most
//! one entry. The submission list is what a Sheets `values.batchUpdate`
//! call takes as its `data` field.

mod input;
mod mutation;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cell_ref::parse_address;

pub use input::{clean_numeric_input, input_style, EditableCell, InputKind};
pub use mutation::{record_input, InputChange};

/// One record of the submission list: `{ "range": "B3", "values": [[0.25]] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    pub range: String,
    pub values: Vec<Vec<f64>>,
}

/// Dirty edits of one editing session, keyed by address.
#[derive(Debug, Clone, Default)]
pub struct PendingEdits {
    edits: HashMap<String, f64>,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `address`, replacing any earlier pending value.
    pub fn add_or_update(&mut self, address: &str, value: f64) {
        if self.edits.insert(address.to_string(), value).is_none() {
            log::debug!("pending edit added: {address} = {value}");
        } else {
            log::debug!("pending edit updated: {address} = {value}");
        }
    }

    /// Drop the pending edit for `address`. No-op when there is none.
    pub fn remove(&mut self, address: &str) {
        if self.edits.remove(address).is_some() {
            log::debug!("pending edit removed: {address}");
        }
    }

    pub fn get(&self, address: &str) -> Option<f64> {
        self.edits.get(address).copied()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.edits.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }

    /// Submission list ordered by row, then column. Addresses that do not
    /// parse sort last, by their text.
    pub fn submission(&self) -> Vec<EditRecord> {
        let mut keyed: Vec<_> = self
            .edits
            .iter()
            .map(|(address, value)| (parse_address(address).ok(), address, *value))
            .collect();
        keyed.sort_by(|a, b| match (a.0, b.0) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.1.cmp(b.1),
        });

        keyed
            .into_iter()
            .map(|(_, address, value)| EditRecord {
                range: address.clone(),
                values: vec![vec![value]],
            })
            .collect()
    }

    /// Submission list as JSON.
    pub fn submission_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(&self.submission())?)
    }
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

    #[test]
    fn test_add_then_update_keeps_one_entry() {
        let mut edits = PendingEdits::new();
        edits.add_or_update("A1", 1.0);
        edits.add_or_update("A1", 2.0);
        assert_eq!(edits.len(), 1);
        assert_eq!(edits.get("A1"), Some(2.0));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut edits = PendingEdits::new();
        edits.add_or_update("B2", 5.0);
        edits.remove("C3");
        assert_eq!(edits.len(), 1);
        edits.remove("B2");
        edits.remove("B2");
        assert!(edits.is_empty());
    }

    #[test]
    fn test_submission_ordered_by_row_then_column() {
        let mut edits = PendingEdits::new();
        edits.add_or_update("A10", 3.0);
        edits.add_or_update("B2", 2.0);
        edits.add_or_update("A2", 1.0);

        let ranges: Vec<_> = edits.submission().into_iter().map(|r| r.range).collect();
        assert_eq!(ranges, vec!["A2", "B2", "A10"]);
    }

    #[test]
    fn test_submission_json_shape() {
        let mut edits = PendingEdits::new();
        edits.add_or_update("C3", 0.25);
        assert_eq!(
            edits.submission_json().unwrap(),
            r#"[{"range":"C3","values":[[0.25]]}]"#
        );
    }
}
