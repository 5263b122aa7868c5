//! Numeric input model for editable cells.

use serde::Serialize;

use crate::types::{CellData, StyleMap};

/// How an editable cell presents its number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    #[default]
    Plain,
    /// Shown rounded to cents.
    Currency,
    /// Shown multiplied by 100; stored as the fraction.
    Percent,
}

impl InputKind {
    /// Classify a cell by its number format.
    ///
    /// A pattern is required: one starting with `"$"` is currency, otherwise a
    /// `PERCENT` format type is a percentage.
    pub fn from_cell(cell: Option<&CellData>) -> Self {
        let Some(format) = cell
            .and_then(|c| c.effective_format.as_ref())
            .and_then(|f| f.number_format.as_ref())
        else {
            return Self::Plain;
        };
        let Some(pattern) = &format.pattern else {
            return Self::Plain;
        };

        if pattern.starts_with("\"$\"") {
            Self::Currency
        } else if format.kind.as_deref() == Some("PERCENT") {
            Self::Percent
        } else {
            Self::Plain
        }
    }

    /// Value shown in the input for an underlying cell value.
    pub fn display_value(self, value: f64) -> f64 {
        match self {
            Self::Plain => value,
            Self::Currency => round_to(value, 2),
            Self::Percent => round_to(100.0 * value, 6),
        }
    }

    /// Value recorded as a pending edit for an entered display value.
    pub fn stored_value(self, display: f64) -> f64 {
        match self {
            Self::Percent => display / 100.0,
            Self::Plain | Self::Currency => display,
        }
    }
}

/// Round to `digits` decimals, half away from zero on the exact binary value
/// (`1.125` → `1.13`, while `1.005`, stored as `1.00499…`, → `1.0`).
fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Exact decimal expansion; no f64 has more than 1074 fractional digits
    let exact = format!("{:.1074}", value.abs());
    let Some((int_part, frac)) = exact.split_once('.') else {
        return value;
    };
    let kept = frac.get(..digits).unwrap_or(frac);
    let round_up = frac.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    let mut scaled: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if round_up {
        increment_digits(&mut scaled);
    }
    let split = scaled.len().saturating_sub(kept.len());
    let (whole, fraction) = scaled.split_at(split);
    let text = if fraction.is_empty() {
        String::from_utf8_lossy(whole).into_owned()
    } else {
        format!(
            "{}.{}",
            String::from_utf8_lossy(whole),
            String::from_utf8_lossy(fraction)
        )
    };

    match text.parse::<f64>() {
        Ok(rounded) if value.is_sign_negative() => -rounded,
        Ok(rounded) => rounded,
        Err(_) => value,
    }
}

/// Add one to a run of ASCII decimal digits.
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Render a number the way it appears in an input (`3`, `0.25`, never `-0`).
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// An editable cell: everything needed to render its input and to track
/// edits against its original value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableCell {
    pub address: String,
    pub row: u32,
    pub col: u32,
    pub kind: InputKind,
    /// Original value in display units (percent already multiplied by 100).
    pub original: f64,
    /// Initial text of the input.
    pub display: String,
    pub tab_index: u32,
    /// Style for the `<input>` element.
    pub style: StyleMap,
}

impl EditableCell {
    /// Build the input model; a missing number counts as 0.
    pub fn new(address: String, row: u32, col: u32, cell: Option<&CellData>) -> Self {
        let kind = InputKind::from_cell(cell);
        let original = kind.display_value(cell.and_then(CellData::number_value).unwrap_or(0.0));
        Self {
            address,
            row,
            col,
            kind,
            original,
            display: format_number(original),
            tab_index: row,
            style: StyleMap::new(),
        }
    }
}

/// Normalize free keyboard input into a numeric string.
///
/// Keeps only digits, `-` and `.`; keeps the first `.` and drops later
/// periods (so `"1.2.3"` becomes `"1.23"`); drops every `-` that is not the
/// first character.
pub fn clean_numeric_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_period = false;

    for ch in raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
    {
        match ch {
            '.' if seen_period => {}
            '.' => {
                seen_period = true;
                out.push(ch);
            }
            '-' if !out.is_empty() => {}
            _ => out.push(ch),
        }
    }

    out
}

/// Derive the `<input>` style from its cell's style.
///
/// Drops the border and fixed heights, narrows the width by the left border
/// (1px when there is none) and pads percent inputs on the right for the
/// `%` suffix.
pub fn input_style(cell_style: &StyleMap, kind: InputKind) -> StyleMap {
    let mut style = cell_style.clone();

    if kind == InputKind::Percent {
        style.set("padding-right", "1.01em");
    }

    style.set("border", "none");
    style.remove("max-height");
    style.remove("height");

    if let Some(width) = style.get("width").and_then(leading_number) {
        let border = style
            .get("border-left")
            .and_then(leading_number)
            .filter(|w| *w != 0.0)
            .unwrap_or(1.0);
        style.set("width", format!("{}px", width - border.trunc()));
    }

    style
}

/// Parse the numeric prefix of a CSS length such as `"100px"` or `"2px solid"`.
fn leading_number(value: &str) -> Option<f64> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    value.get(..end)?.parse().ok()
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
    use crate::types::{CellFormat, ExtendedValue, NumberFormat};

    fn numeric_cell(value: f64, kind: &str, pattern: Option<&str>) -> CellData {
        CellData {
            effective_value: Some(ExtendedValue {
                number_value: Some(value),
                ..ExtendedValue::default()
            }),
            effective_format: Some(CellFormat {
                number_format: Some(NumberFormat {
                    kind: Some(kind.into()),
                    pattern: pattern.map(Into::into),
                }),
                ..CellFormat::default()
            }),
            ..CellData::default()
        }
    }

    #[test]
    fn test_clean_strips_junk_and_extra_periods() {
        assert_eq!(clean_numeric_input("12.3.4.5"), "12.345");
        assert_eq!(clean_numeric_input("1.2.3"), "1.23");
        assert_eq!(clean_numeric_input("$1,234.50"), "1234.50");
        assert_eq!(clean_numeric_input("abc"), "");
    }

    #[test]
    fn test_clean_keeps_only_leading_dash() {
        assert_eq!(clean_numeric_input("1--2"), "12");
        assert_eq!(clean_numeric_input("-1-2"), "-12");
        assert_eq!(clean_numeric_input("--5"), "-5");
    }

    #[test]
    fn test_clean_leading_dash_after_stripped_junk() {
        // The dash is first once the junk is gone
        assert_eq!(clean_numeric_input("x-5"), "-5");
    }

    #[test]
    fn test_kind_detection() {
        let currency = numeric_cell(1.0, "CURRENCY", Some("\"$\"#,##0.00"));
        let percent = numeric_cell(0.5, "PERCENT", Some("0.00%"));
        let percent_no_pattern = numeric_cell(0.5, "PERCENT", None);
        let number = numeric_cell(1.0, "NUMBER", Some("#,##0"));

        assert_eq!(InputKind::from_cell(Some(&currency)), InputKind::Currency);
        assert_eq!(InputKind::from_cell(Some(&percent)), InputKind::Percent);
        assert_eq!(InputKind::from_cell(Some(&percent_no_pattern)), InputKind::Plain);
        assert_eq!(InputKind::from_cell(Some(&number)), InputKind::Plain);
        assert_eq!(InputKind::from_cell(None), InputKind::Plain);
    }

    #[test]
    fn test_display_values() {
        assert_eq!(InputKind::Currency.display_value(12.3456), 12.35);
        assert_eq!(InputKind::Percent.display_value(0.123_456_789), 12.345_679);
        assert_eq!(InputKind::Percent.display_value(0.07), 7.0);
        assert_eq!(InputKind::Plain.display_value(0.1), 0.1);
        assert_eq!(InputKind::Percent.stored_value(25.0), 0.25);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-1.125, 2), -1.13);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(9.995, 2), 9.99);
        assert_eq!(round_to(99.5, 0), 100.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_editable_cell_defaults() {
        let cell = EditableCell::new("B3".into(), 2, 1, None);
        assert_eq!(cell.original, 0.0);
        assert_eq!(cell.display, "0");

        let pct = numeric_cell(0.25, "PERCENT", Some("0%"));
        let cell = EditableCell::new("A1".into(), 0, 0, Some(&pct));
        assert_eq!(cell.display, "25");
    }

    #[test]
    fn test_input_style() {
        let cell: StyleMap = [
            ("background-color", "rgb(255, 0, 0)"),
            ("max-height", "21px"),
            ("height", "21px"),
            ("max-width", "100px"),
            ("width", "100px"),
        ]
        .into_iter()
        .collect();

        let style = input_style(&cell, InputKind::Percent);
        assert_eq!(style.get("padding-right"), Some("1.01em"));
        assert_eq!(style.get("border"), Some("none"));
        assert!(!style.contains("height"));
        assert!(!style.contains("max-height"));
        assert_eq!(style.get("width"), Some("99px"));
        assert_eq!(style.get("background-color"), Some("rgb(255, 0, 0)"));
    }

    #[test]
    fn test_input_style_subtracts_left_border() {
        let cell: StyleMap = [("border-left", "3px SOLID rgb(0, 0, 0)"), ("width", "50px")]
            .into_iter()
            .collect();
        let style = input_style(&cell, InputKind::Plain);
        assert_eq!(style.get("width"), Some("47px"));
        assert!(!style.contains("padding-right"));
    }

    #[test]
    fn test_input_style_without_width() {
        let style = input_style(&StyleMap::new(), InputKind::Plain);
        assert!(!style.contains("width"));
    }
}
