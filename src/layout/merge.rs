//! Merge participation for a single cell.

use serde::Serialize;

use crate::types::{CellSpan, GridRange};

/// A merge range with end indices exclusive (`startRow <= r < endRow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRange {
    pub start_row: u32,
    pub end_row: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl MergeRange {
    pub const fn new(start_row: u32, end_row: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    pub fn is_anchor(&self, row: u32, col: u32) -> bool {
        self.start_row == row && self.start_col == col
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.start_row <= row && row < self.end_row && self.start_col <= col && col < self.end_col
    }

    /// Row and column span of the anchor cell.
    pub fn span(&self) -> CellSpan {
        CellSpan {
            rowspan: self.end_row.saturating_sub(self.start_row),
            colspan: self.end_col.saturating_sub(self.start_col),
        }
    }
}

impl From<&GridRange> for MergeRange {
    /// Missing indices are treated as 0.
    fn from(r: &GridRange) -> Self {
        Self {
            start_row: r.start_row_index.unwrap_or(0),
            end_row: r.end_row_index.unwrap_or(0),
            start_col: r.start_column_index.unwrap_or(0),
            end_col: r.end_column_index.unwrap_or(0),
        }
    }
}

/// Normalize API ranges once per table.
pub fn merge_ranges(ranges: &[GridRange]) -> Vec<MergeRange> {
    ranges.iter().map(MergeRange::from).collect()
}

/// Result of [`check_merges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeCheck {
    /// The cell is the top-left anchor of `range`.
    pub start_of_merge: bool,
    /// The cell lies inside `range` but is not its anchor.
    pub in_merge: bool,
    pub range: Option<MergeRange>,
}

impl MergeCheck {
    /// Absorbed cells are rendered by their anchor and must produce no output.
    pub fn is_absorbed(&self) -> bool {
        self.in_merge && !self.start_of_merge
    }

    /// Span to render, present only on anchors.
    pub fn span(&self) -> Option<CellSpan> {
        if self.start_of_merge {
            self.range.as_ref().map(MergeRange::span)
        } else {
            None
        }
    }
}

/// Decide whether `(row, col)` anchors a merge, sits inside one, or neither.
///
/// Anchors are checked first and win outright. Ranges are assumed not to
/// overlap; if they do, the first matching range in list order is used.
pub fn check_merges(merges: &[MergeRange], row: u32, col: u32) -> MergeCheck {
    if let Some(range) = merges.iter().find(|m| m.is_anchor(row, col)) {
        return MergeCheck {
            start_of_merge: true,
            in_merge: false,
            range: Some(*range),
        };
    }

    match merges.iter().find(|m| m.contains(row, col)) {
        Some(range) => MergeCheck {
            start_of_merge: false,
            in_merge: true,
            range: Some(*range),
        },
        None => MergeCheck::default(),
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

    const RANGE: MergeRange = MergeRange::new(1, 3, 2, 4);

    #[test]
    fn test_anchor() {
        let check = check_merges(&[RANGE], 1, 2);
        assert!(check.start_of_merge);
        assert!(!check.is_absorbed());
        assert_eq!(
            check.span(),
            Some(CellSpan {
                rowspan: 2,
                colspan: 2
            })
        );
    }

    #[test]
    fn test_inside() {
        let check = check_merges(&[RANGE], 2, 3);
        assert!(check.in_merge);
        assert!(!check.start_of_merge);
        assert!(check.is_absorbed());
        assert_eq!(check.range, Some(RANGE));
        assert_eq!(check.span(), None);
    }

    #[test]
    fn test_end_bounds_excluded() {
        assert_eq!(check_merges(&[RANGE], 3, 2), MergeCheck::default());
        assert_eq!(check_merges(&[RANGE], 1, 4), MergeCheck::default());
    }

    #[test]
    fn test_anchor_wins_over_earlier_containing_range() {
        let outer = MergeRange::new(0, 5, 0, 5);
        let inner = MergeRange::new(2, 3, 2, 3);
        let check = check_merges(&[outer, inner], 2, 2);
        assert!(check.start_of_merge);
        assert_eq!(check.range, Some(inner));
    }

    #[test]
    fn test_first_containing_range_wins() {
        let a = MergeRange::new(0, 4, 0, 4);
        let b = MergeRange::new(1, 4, 1, 4);
        assert_eq!(check_merges(&[a, b], 3, 3).range, Some(a));
    }

    #[test]
    fn test_missing_indices_default_to_zero() {
        let range = MergeRange::from(&GridRange {
            end_row_index: Some(2),
            end_column_index: Some(2),
            ..GridRange::default()
        });
        assert_eq!(range, MergeRange::new(0, 2, 0, 2));
        assert!(check_merges(&[range], 0, 0).start_of_merge);
    }
}
