//! Data types for sheetgrid: the Sheets input model, the error union and the
//! resolved output model.

mod resolved;
mod spreadsheet;
mod style_map;
mod table_data;

pub use resolved::*;
pub use spreadsheet::*;
pub use style_map::*;
pub use table_data::*;
