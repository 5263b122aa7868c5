//! Resolution of cell and text formats into CSS property maps.
//!
//! Cell style is composed in a fixed order; later steps overwrite earlier
//! keys, and explicit row/column sizes are always applied last.

use crate::color::{resolve_color, rgb_str};
use crate::layout::px;
use crate::types::{CellData, CellFormat, DimensionProperties, StyleMap, TextFormat};

/// How a cell's text behaves when it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapStrategy {
    OverflowCell,
    Clip,
    Wrap,
}

impl WrapStrategy {
    /// Parse the API value; `LEGACY_WRAP` and unknown values map to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OVERFLOW_CELL" => Some(Self::OverflowCell),
            "CLIP" => Some(Self::Clip),
            "WRAP" => Some(Self::Wrap),
            _ => None,
        }
    }

    fn apply(self, style: &mut StyleMap) {
        match self {
            Self::OverflowCell => {
                style.set("overflow", "visible");
                style.set("white-space", "nowrap");
            }
            Self::Clip => {
                style.set("overflow", "hidden");
                style.set("white-space", "nowrap");
            }
            Self::Wrap => style.set("white-space", "pre-wrap"),
        }
    }
}

/// CSS for a text format. Only properties present in `format` are emitted.
///
/// Strikethrough and underline both target `text-decoration`; underline is
/// evaluated last and wins when both are set.
pub fn text_style(format: Option<&TextFormat>) -> StyleMap {
    let mut style = StyleMap::new();
    let Some(format) = format else {
        return style;
    };

    if let Some(color) = resolve_color(
        format.foreground_color_style.as_ref(),
        format.foreground_color.as_ref(),
    ) {
        style.set("color", rgb_str(color));
    }
    if let Some(family) = &format.font_family {
        style.set("font-family", family.as_str());
    }
    if let Some(size) = format.font_size {
        style.set("font-size", format!("{size}pt"));
    }
    if format.bold == Some(true) {
        style.set("font-weight", "bold");
    }
    if format.italic == Some(true) {
        style.set("font-style", "italic");
    }
    if format.strikethrough == Some(true) {
        style.set("text-decoration", "line-through");
    }
    if format.underline == Some(true) {
        style.set("text-decoration", "underline");
    }

    style
}

/// CSS for a whole cell.
///
/// A cell without an effective format yields an empty map, even when row or
/// column sizes are known.
pub fn cell_style(
    cell: Option<&CellData>,
    row_size: Option<&DimensionProperties>,
    col_size: Option<&DimensionProperties>,
) -> StyleMap {
    let Some(format) = cell.and_then(|c| c.effective_format.as_ref()) else {
        return StyleMap::new();
    };

    let mut style = format_style(format);

    if let Some(row) = row_size {
        let height = px(row.pixels());
        style.set("max-height", height.clone());
        style.set("height", height);
    }
    if let Some(col) = col_size {
        let width = px(col.pixels());
        style.set("max-width", width.clone());
        style.set("width", width);
    }

    style
}

/// Format-derived part of [`cell_style`], before sizing.
fn format_style(format: &CellFormat) -> StyleMap {
    let mut style = StyleMap::new();

    if let Some(bg) = resolve_color(
        format.background_color_style.as_ref(),
        format.background_color.as_ref(),
    ) {
        style.set("background-color", rgb_str(bg));
    }

    if let Some(h) = &format.horizontal_alignment {
        style.set("text-align", h.as_str());
    }
    if let Some(v) = &format.vertical_alignment {
        style.set("vertical-align", v.as_str());
    }

    if let Some(padding) = &format.padding {
        for (side, value) in padding.sides() {
            style.set(&format!("padding-{side}"), px(value));
        }
    }

    if let Some(borders) = &format.borders {
        for (side, border) in borders.sides() {
            // Sides without an RGB color are skipped even if style/width are set
            let Some(border) = border else { continue };
            let Some(color) = border.color_style.as_ref().and_then(|c| c.rgb_color.as_ref())
            else {
                continue;
            };
            style.set(
                &format!("border-{side}"),
                format!(
                    "{}px {} {}",
                    border.width.unwrap_or(0.0),
                    border.style.as_deref().unwrap_or("solid"),
                    rgb_str(color)
                ),
            );
        }
    }

    if let Some(text) = &format.text_format {
        style.merge(&text_style(Some(text)));
    }

    if let Some(wrap) = format.wrap_strategy.as_deref().and_then(WrapStrategy::parse) {
        wrap.apply(&mut style);
    }

    style
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
    use crate::types::{Border, Borders, Color, ColorStyle, Padding};

    fn cell(format: CellFormat) -> CellData {
        CellData {
            effective_format: Some(format),
            ..CellData::default()
        }
    }

    fn size(px: f64) -> DimensionProperties {
        DimensionProperties {
            pixel_size: Some(px),
            ..DimensionProperties::default()
        }
    }

    #[test]
    fn test_no_format_is_empty() {
        assert!(cell_style(None, Some(&size(20.0)), Some(&size(50.0))).is_empty());
        assert!(cell_style(Some(&CellData::default()), Some(&size(20.0)), None).is_empty());
        assert!(text_style(None).is_empty());
    }

    #[test]
    fn test_background_color() {
        let c = cell(CellFormat {
            background_color: Some(Color::rgb(1.0, 0.0, 0.0)),
            ..CellFormat::default()
        });
        assert_eq!(
            cell_style(Some(&c), None, None).get("background-color"),
            Some("rgb(255, 0, 0)")
        );
    }

    #[test]
    fn test_background_color_style_preferred() {
        let c = cell(CellFormat {
            background_color: Some(Color::rgb(1.0, 0.0, 0.0)),
            background_color_style: Some(ColorStyle::rgb(Color::rgb(0.0, 0.0, 1.0))),
            ..CellFormat::default()
        });
        assert_eq!(
            cell_style(Some(&c), None, None).get("background-color"),
            Some("rgb(0, 0, 255)")
        );
    }

    #[test]
    fn test_alignment_passthrough() {
        let c = cell(CellFormat {
            horizontal_alignment: Some("CENTER".into()),
            vertical_alignment: Some("BOTTOM".into()),
            ..CellFormat::default()
        });
        let style = cell_style(Some(&c), None, None);
        assert_eq!(style.get("text-align"), Some("CENTER"));
        assert_eq!(style.get("vertical-align"), Some("BOTTOM"));
    }

    #[test]
    fn test_padding_sides() {
        let c = cell(CellFormat {
            padding: Some(Padding {
                top: Some(serde_json::json!(2)),
                right: Some(serde_json::Value::Null),
                ..Padding::default()
            }),
            ..CellFormat::default()
        });
        let style = cell_style(Some(&c), None, None);
        assert_eq!(style.get("padding-top"), Some("2px"));
        assert_eq!(style.get("padding-right"), Some("0px"));
        assert!(!style.contains("padding-bottom"));
        assert!(!style.contains("padding-left"));
    }

    #[test]
    fn test_borders_need_rgb_color() {
        let c = cell(CellFormat {
            borders: Some(Borders {
                top: Some(Border {
                    style: Some("DASHED".into()),
                    width: Some(2.0),
                    color_style: Some(ColorStyle::rgb(Color::default())),
                    ..Border::default()
                }),
                left: Some(Border {
                    color_style: Some(ColorStyle::rgb(Color::rgb(1.0, 0.0, 0.0))),
                    ..Border::default()
                }),
                bottom: Some(Border {
                    style: Some("SOLID".into()),
                    width: Some(1.0),
                    color: Some(Color::default()),
                    ..Border::default()
                }),
                right: None,
            }),
            ..CellFormat::default()
        });
        let style = cell_style(Some(&c), None, None);
        assert_eq!(style.get("border-top"), Some("2px DASHED rgb(0, 0, 0)"));
        assert_eq!(style.get("border-left"), Some("0px solid rgb(255, 0, 0)"));
        assert!(!style.contains("border-bottom"));
        assert!(!style.contains("border-right"));
    }

    #[test]
    fn test_text_style_properties() {
        let style = text_style(Some(&TextFormat {
            foreground_color_style: Some(ColorStyle::rgb(Color::rgb(0.0, 0.0, 1.0))),
            font_family: Some("Arial".into()),
            font_size: Some(10.0),
            bold: Some(true),
            italic: Some(false),
            ..TextFormat::default()
        }));
        assert_eq!(style.get("color"), Some("rgb(0, 0, 255)"));
        assert_eq!(style.get("font-family"), Some("Arial"));
        assert_eq!(style.get("font-size"), Some("10pt"));
        assert_eq!(style.get("font-weight"), Some("bold"));
        assert!(!style.contains("font-style"));
    }

    #[test]
    fn test_underline_overrides_strikethrough() {
        let style = text_style(Some(&TextFormat {
            strikethrough: Some(true),
            underline: Some(true),
            ..TextFormat::default()
        }));
        assert_eq!(style.get("text-decoration"), Some("underline"));

        let style = text_style(Some(&TextFormat {
            strikethrough: Some(true),
            ..TextFormat::default()
        }));
        assert_eq!(style.get("text-decoration"), Some("line-through"));
    }

    #[test]
    fn test_wrap_strategies() {
        let wrap = |w: &str| {
            cell_style(
                Some(&cell(CellFormat {
                    wrap_strategy: Some(w.into()),
                    ..CellFormat::default()
                })),
                None,
                None,
            )
        };
        let s = wrap("OVERFLOW_CELL");
        assert_eq!((s.get("overflow"), s.get("white-space")), (Some("visible"), Some("nowrap")));
        let s = wrap("CLIP");
        assert_eq!((s.get("overflow"), s.get("white-space")), (Some("hidden"), Some("nowrap")));
        let s = wrap("WRAP");
        assert_eq!((s.get("overflow"), s.get("white-space")), (None, Some("pre-wrap")));
        assert!(wrap("LEGACY_WRAP").is_empty());
    }

    #[test]
    fn test_sizes_applied_last() {
        let c = cell(CellFormat::default());
        let style = cell_style(Some(&c), Some(&size(21.0)), Some(&DimensionProperties::default()));
        let keys: Vec<_> = style.iter().collect();
        assert_eq!(
            keys,
            vec![
                ("max-height", "21px"),
                ("height", "21px"),
                ("max-width", "0px"),
                ("width", "0px"),
            ]
        );
    }
}
