//! Table settings.

use std::fmt;
use std::sync::Arc;

use crate::types::CellData;

/// Predicate deciding whether a cell is rendered as an input.
pub type EditablePredicate = Arc<dyn Fn(Option<&CellData>) -> bool + Send + Sync>;

/// Which cells become numeric inputs.
#[derive(Clone, Default)]
pub enum EditablePolicy {
    /// Every cell is read-only.
    #[default]
    ReadOnly,
    /// Every cell is editable, including empty positions.
    All,
    /// Cells whose effective value is a number.
    Numeric,
    Custom(EditablePredicate),
}

impl EditablePolicy {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(Option<&CellData>) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Parse a CLI value: `none`, `all` or `numeric`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" | "readonly" => Some(Self::ReadOnly),
            "all" => Some(Self::All),
            "numeric" => Some(Self::Numeric),
            _ => None,
        }
    }

    pub fn is_editable(&self, cell: Option<&CellData>) -> bool {
        match self {
            Self::ReadOnly => false,
            Self::All => true,
            Self::Numeric => cell.and_then(CellData::number_value).is_some(),
            Self::Custom(f) => f(cell),
        }
    }
}

impl fmt::Debug for EditablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadOnly => f.write_str("ReadOnly"),
            Self::All => f.write_str("All"),
            Self::Numeric => f.write_str("Numeric"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Settings for resolving a table.
#[derive(Debug, Clone, Default)]
pub struct TableSettings {
    /// Tab through inputs down each column instead of across each row.
    pub column_tabbing: bool,
    pub editable: EditablePolicy,
    /// Also return the dense data matrix, and always recompute the grid size.
    pub create_matrix: bool,
}

impl TableSettings {
    /// Tab index of an input at `(row, col)`.
    pub fn tab_index(&self, row: u32, col: u32) -> u32 {
        if self.column_tabbing {
            col
        } else {
            row
        }
    }
}
