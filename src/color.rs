//! Color resolution utilities
//!
//! Sheets colors are normalized `0.0..=1.0` channels. CSS output scales them
//! to `0..=255` without rounding, so `0.5` becomes `127.5`.

use crate::types::{Color, ColorStyle};

/// Format a color as `rgb(r, g, b)`; absent or zero channels render as `0`.
pub fn rgb_str(color: &Color) -> String {
    format!(
        "rgb({}, {}, {})",
        scale(color.red),
        scale(color.green),
        scale(color.blue)
    )
}

/// Like [`rgb_str`] but for an optional color; `None` yields an empty string.
pub fn rgb_str_opt(color: Option<&Color>) -> String {
    color.map(rgb_str).unwrap_or_default()
}

fn scale(channel: Option<f64>) -> f64 {
    match channel {
        Some(v) if !v.is_nan() && v != 0.0 => 255.0 * v,
        _ => 0.0,
    }
}

/// Pick the effective RGB color: the structured color style wins over the
/// legacy plain color field. Theme-only styles carry no RGB and fall through.
pub fn resolve_color<'a>(
    style: Option<&'a ColorStyle>,
    legacy: Option<&'a Color>,
) -> Option<&'a Color> {
    style.and_then(|s| s.rgb_color.as_ref()).or(legacy)
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
    fn test_primary_colors() {
        assert_eq!(rgb_str(&Color::rgb(1.0, 0.0, 0.0)), "rgb(255, 0, 0)");
        assert_eq!(rgb_str(&Color::rgb(0.0, 1.0, 1.0)), "rgb(0, 255, 255)");
    }

    #[test]
    fn test_missing_channels_are_zero() {
        let color = Color {
            green: Some(1.0),
            ..Color::default()
        };
        assert_eq!(rgb_str(&color), "rgb(0, 255, 0)");
        assert_eq!(rgb_str(&Color::default()), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_channels_are_not_rounded() {
        assert_eq!(rgb_str(&Color::rgb(0.5, 0.2, 1.0)), "rgb(127.5, 51, 255)");
    }

    #[test]
    fn test_optional_color() {
        assert_eq!(rgb_str_opt(None), "");
        assert_eq!(rgb_str_opt(Some(&Color::rgb(0.0, 0.0, 1.0))), "rgb(0, 0, 255)");
    }

    #[test]
    fn test_structured_color_preferred() {
        let structured = ColorStyle::rgb(Color::rgb(1.0, 0.0, 0.0));
        let legacy = Color::rgb(0.0, 0.0, 1.0);
        assert_eq!(
            resolve_color(Some(&structured), Some(&legacy)),
            Some(&Color::rgb(1.0, 0.0, 0.0))
        );

        let theme_only = ColorStyle {
            rgb_color: None,
            theme_color: Some("ACCENT1".into()),
        };
        assert_eq!(resolve_color(Some(&theme_only), Some(&legacy)), Some(&legacy));
        assert_eq!(resolve_color(None, None), None);
    }
}
