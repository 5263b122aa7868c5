//! Rich text segmentation
//! This module splits a cell's display text into styled fragments according
//! to its format runs.
//!
//! Run offsets are UTF-16 code units, as sent by the Sheets API. The first
//! run always starts at 0 and every run ends where the next one starts, so the
//! fragments tile the text without gaps or overlaps.

use std::iter;

use crate::styles::text_style;
use crate::types::{CellData, TextFormatRun, TextFragment};

/// Split `formatted` into fragments, one per run.
///
/// Without runs the whole text (possibly empty) is a single unstyled fragment.
pub fn segment_runs(formatted: Option<&str>, runs: &[TextFormatRun]) -> Vec<TextFragment> {
    let text = formatted.unwrap_or("");
    if runs.is_empty() {
        return vec![TextFragment::plain(text)];
    }

    // Byte offsets, clamped to be non-decreasing and inside the text
    let starts: Vec<usize> = runs
        .iter()
        .enumerate()
        .scan(0usize, |prev, (i, run)| {
            let start = if i == 0 {
                0
            } else {
                utf16_to_byte_offset(text, run.start_index.unwrap_or(0)).max(*prev)
            };
            *prev = start;
            Some(start)
        })
        .collect();

    let ends = starts.iter().skip(1).copied().chain(iter::once(text.len()));

    runs.iter()
        .zip(starts.iter().copied().zip(ends))
        .map(|(run, (start, end))| {
            let format = run.format.as_ref();
            TextFragment {
                text: text.get(start..end).unwrap_or_default().to_string(),
                style: text_style(format),
                link: format.and_then(|f| f.link_uri()).map(str::to_string),
            }
        })
        .collect()
}

/// Fragments for a cell's content. An absent cell has no content at all.
pub fn cell_fragments(cell: Option<&CellData>) -> Vec<TextFragment> {
    let Some(cell) = cell else {
        return Vec::new();
    };
    segment_runs(
        cell.formatted_value.as_deref(),
        cell.text_format_runs.as_deref().unwrap_or_default(),
    )
}

/// Byte offset of the first char starting at or after `units` UTF-16 units.
fn utf16_to_byte_offset(text: &str, units: u32) -> usize {
    let target = units as usize;
    let mut seen = 0usize;
    for (byte, ch) in text.char_indices() {
        if seen >= target {
            return byte;
        }
        seen += ch.len_utf16();
    }
    text.len()
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
    use crate::types::{Link, TextFormat};

    fn run(start: u32, format: TextFormat) -> TextFormatRun {
        TextFormatRun {
            start_index: Some(start),
            format: Some(format),
        }
    }

    fn bold() -> TextFormat {
        TextFormat {
            bold: Some(true),
            ..TextFormat::default()
        }
    }

    fn link(uri: &str) -> TextFormat {
        TextFormat {
            link: Some(Link {
                uri: Some(uri.into()),
            }),
            ..TextFormat::default()
        }
    }

    #[test]
    fn test_two_runs_tile_text() {
        let runs = vec![run(0, bold()), run(6, link("https://example.com"))];
        let frags = segment_runs(Some("Hello World"), &runs);

        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].text, "Hello ");
        assert_eq!(frags[0].style.get("font-weight"), Some("bold"));
        assert!(!frags[0].is_link());
        assert_eq!(frags[1].text, "World");
        assert_eq!(frags[1].link.as_deref(), Some("https://example.com"));
        let joined: String = frags.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(joined, "Hello World");
    }

    #[test]
    fn test_first_run_offset_ignored() {
        let frags = segment_runs(Some("abcdef"), &[run(3, bold())]);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].text, "abcdef");
    }

    #[test]
    fn test_no_runs() {
        let frags = segment_runs(Some("plain"), &[]);
        assert_eq!(frags, vec![TextFragment::plain("plain")]);
        assert_eq!(segment_runs(None, &[]), vec![TextFragment::plain("")]);
    }

    #[test]
    fn test_offsets_past_end_are_clamped() {
        let frags = segment_runs(Some("abc"), &[run(0, bold()), run(10, bold())]);
        assert_eq!(frags[0].text, "abc");
        assert_eq!(frags[1].text, "");
    }

    #[test]
    fn test_decreasing_offsets_do_not_overlap() {
        let frags = segment_runs(
            Some("abcdef"),
            &[run(0, bold()), run(4, bold()), run(2, bold())],
        );
        let texts: Vec<_> = frags.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["abcd", "", "ef"]);
    }

    #[test]
    fn test_utf16_offsets() {
        // "é" is one UTF-16 unit (two bytes), "😀" is two units (four bytes)
        let frags = segment_runs(Some("é😀x"), &[run(0, bold()), run(1, bold()), run(3, bold())]);
        let texts: Vec<_> = frags.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["é", "😀", "x"]);
    }

    #[test]
    fn test_run_without_format_is_unstyled() {
        let runs = vec![TextFormatRun::default()];
        let frags = segment_runs(Some("x"), &runs);
        assert!(frags[0].style.is_empty());
        assert!(!frags[0].is_link());
    }

    #[test]
    fn test_absent_cell_has_no_fragments() {
        assert!(cell_fragments(None).is_empty());
        assert_eq!(cell_fragments(Some(&CellData::default())).len(), 1);
    }
}
