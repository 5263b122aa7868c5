//! Grid layout decisions that do not depend on cell content:
//! - Merge participation and spans
//! - Row heights and column widths

mod dimensions;
mod merge;

pub use dimensions::{column_style, row_style, SheetDimensions};
pub(crate) use dimensions::px;
pub use merge::{check_merges, merge_ranges, MergeCheck, MergeRange};
