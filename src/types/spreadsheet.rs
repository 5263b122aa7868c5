use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A spreadsheet as returned by the Sheets v4 `spreadsheets.get` call with
/// `includeGridData=true`.
///
/// `numrows`/`numcols` are optional precomputed sizes that some backends
/// attach alongside the grid data.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numrows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numcols: Option<u32>,
}

impl Spreadsheet {
    /// The grid data block that gets rendered: first sheet, first data block.
    pub fn grid_data(&self) -> Option<&GridData> {
        self.sheets.first().and_then(|s| s.data.first())
    }

    /// Source rows of the rendered grid (empty when absent).
    pub fn rows(&self) -> &[RowData] {
        self.grid_data().map_or(&[], |g| g.row_data.as_slice())
    }

    /// Merge ranges of the first sheet (empty when absent).
    pub fn merges(&self) -> &[GridRange] {
        self.sheets.first().map_or(&[], |s| s.merges.as_slice())
    }

    /// Per-row dimension metadata (empty when absent).
    pub fn row_metadata(&self) -> &[DimensionProperties] {
        self.grid_data().map_or(&[], |g| g.row_metadata.as_slice())
    }

    /// Per-column dimension metadata (empty when absent).
    pub fn column_metadata(&self) -> &[DimensionProperties] {
        self.grid_data().map_or(&[], |g| g.column_metadata.as_slice())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,
    #[serde(default)]
    pub data: Vec<GridData>,
    #[serde(default)]
    pub merges: Vec<GridRange>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One block of grid data.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    #[serde(default)]
    pub start_row: Option<u32>,
    #[serde(default)]
    pub start_column: Option<u32>,
    #[serde(default)]
    pub row_data: Vec<RowData>,
    #[serde(default)]
    pub row_metadata: Vec<DimensionProperties>,
    #[serde(default)]
    pub column_metadata: Vec<DimensionProperties>,
}

/// A source row. `values` may be missing or shorter than its neighbours.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<CellData>>,
}

impl RowData {
    /// Number of cell values in this row (0 when absent).
    pub fn len(&self) -> usize {
        self.values.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cell(&self, col: usize) -> Option<&CellData> {
        self.values.as_ref().and_then(|v| v.get(col))
    }
}

/// Row or column sizing. Missing `pixelSize` means 0.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_by_user: Option<bool>,
}

impl DimensionProperties {
    pub fn pixels(&self) -> f64 {
        self.pixel_size.unwrap_or(0.0)
    }
}

/// A merge range; end indices are exclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

/// One cell of source data.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_value: Option<ExtendedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_format: Option<CellFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_format_runs: Option<Vec<TextFormatRun>>,
}

impl CellData {
    /// The effective numeric value, if the cell holds a number.
    pub fn number_value(&self) -> Option<f64> {
        self.effective_value.as_ref().and_then(|v| v.number_value)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_value: Option<String>,
}

/// Effective cell format.
///
/// Enum-like fields (alignment, wrap strategy) are kept as the raw strings the
/// API sends, since alignment values pass straight through to the output.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color_style: Option<ColorStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Borders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_format: Option<TextFormat>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Normalized color; each channel in `0.0..=1.0`, absent meaning 0.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Color {
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColorStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

impl ColorStyle {
    pub fn rgb(color: Color) -> Self {
        Self {
            rgb_color: Some(color),
            theme_color: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Borders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
}

impl Borders {
    /// Sides in output order, paired with their CSS side name.
    pub fn sides(&self) -> [(&'static str, Option<&Border>); 4] {
        [
            ("top", self.top.as_ref()),
            ("right", self.right.as_ref()),
            ("bottom", self.bottom.as_ref()),
            ("left", self.left.as_ref()),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_style: Option<ColorStyle>,
}

/// Cell padding. A side is `Some` whenever its key appears in the source,
/// even if the value is `null` or not a number.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub top: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub right: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub left: Option<Value>,
}

impl Padding {
    /// Uniform numeric padding on all four sides.
    pub fn uniform(px: f64) -> Self {
        let v = || Some(Value::from(px));
        Self {
            top: v(),
            right: v(),
            bottom: v(),
            left: v(),
        }
    }

    /// Present sides in output order with their pixel value (non-numeric = 0).
    pub fn sides(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("top", self.top.as_ref()),
            ("right", self.right.as_ref()),
            ("bottom", self.bottom.as_ref()),
            ("left", self.left.as_ref()),
        ]
        .into_iter()
        .filter_map(|(side, value)| value.map(|v| (side, v.as_f64().unwrap_or(0.0))))
    }
}

/// Keep a present key as `Some`, including an explicit `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Character-level text format (used both for whole cells and for runs).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color_style: Option<ColorStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextFormat {
    /// Hyperlink target of this format, if any.
    pub fn link_uri(&self) -> Option<&str> {
        self.link.as_ref().and_then(|l| l.uri.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// A format run: applies from `startIndex` (UTF-16 units) up to the next run.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextFormatRun {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TextFormat>,
}
