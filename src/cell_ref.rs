//! Spreadsheet column letters and "A1"-style cell addresses.
//!
//! Column letters use bijective base-26: there is no digit for zero, so
//! `Z` is 26 and `AA` is 27. Address columns are 1-indexed; everything else in
//! the crate is 0-indexed.

use crate::error::{GridError, Result};

/// Convert a 1-indexed column number to its letter form (`1` → `"A"`, `27` → `"AA"`).
///
/// Returns an empty string for `column <= 0`.
pub fn column_to_letter(column: i64) -> String {
    let mut letters = Vec::new();
    let mut column = column;

    while column > 0 {
        let rem = (column - 1) % 26;
        // rem is always in 0..26
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let letter = char::from(b'A' + rem as u8);
        letters.push(letter);
        column = (column - rem - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Convert a letter sequence back to its 1-indexed column number (`"AB"` → `28`).
///
/// Input must be uppercase `A`–`Z` only; anything else is rejected with
/// [`GridError::InvalidAddress`]. The empty string decodes to `0`.
pub fn letter_to_column(letter: &str) -> Result<i64> {
    let mut column: i64 = 0;

    for b in letter.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(GridError::InvalidAddress(letter.to_string()));
        }
        column = column
            .checked_mul(26)
            .and_then(|c| c.checked_add(i64::from(b - b'A') + 1))
            .ok_or_else(|| GridError::InvalidAddress(letter.to_string()))?;
    }

    Ok(column)
}

/// Format a 0-indexed `(row, col)` pair as an address like `"C5"`.
pub fn cell_address(row: u32, col: u32) -> String {
    format!(
        "{}{}",
        column_to_letter(i64::from(col) + 1),
        u64::from(row) + 1
    )
}

/// Parse an address like `"B12"` into a 0-indexed `(row, col)` pair.
///
/// Letters must come first and be uppercase; the row part must be a
/// positive decimal number. `$` anchors are not accepted.
pub fn parse_address(address: &str) -> Result<(u32, u32)> {
    let invalid = || GridError::InvalidAddress(address.to_string());

    let split = address
        .find(|ch: char| !ch.is_ascii_uppercase())
        .ok_or_else(invalid)?;
    let (letters, digits) = address.split_at(split);

    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let col = letter_to_column(letters)?;
    let row: u64 = digits.parse().map_err(|_| invalid())?;

    let col = u32::try_from(col - 1).map_err(|_| invalid())?;
    let row = row
        .checked_sub(1)
        .and_then(|r| u32::try_from(r).ok())
        .ok_or_else(invalid)?;

    Ok((row, col))
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

    #[test]
    fn test_column_to_letter_boundaries() {
        assert_eq!(column_to_letter(1), "A");
        assert_eq!(column_to_letter(26), "Z");
        assert_eq!(column_to_letter(27), "AA");
        assert_eq!(column_to_letter(52), "AZ");
        assert_eq!(column_to_letter(53), "BA");
        assert_eq!(column_to_letter(702), "ZZ");
        assert_eq!(column_to_letter(703), "AAA");
        assert_eq!(column_to_letter(16384), "XFD");
    }

    #[test]
    fn test_column_to_letter_non_positive() {
        assert_eq!(column_to_letter(0), "");
        assert_eq!(column_to_letter(-5), "");
    }

    #[test]
    fn test_round_trip_two_letter_range() {
        for n in 1..=702 {
            assert_eq!(letter_to_column(&column_to_letter(n)).unwrap(), n, "column {n}");
        }
    }

    #[test]
    fn test_letter_to_column_rejects_lowercase_and_digits() {
        assert!(matches!(
            letter_to_column("a"),
            Err(GridError::InvalidAddress(_))
        ));
        assert!(letter_to_column("A1").is_err());
        assert_eq!(letter_to_column("").unwrap(), 0);
    }

    #[test]
    fn test_cell_address() {
        assert_eq!(cell_address(0, 0), "A1");
        assert_eq!(cell_address(11, 27), "AB12");
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("A1").unwrap(), (0, 0));
        assert_eq!(parse_address("AB12").unwrap(), (11, 27));
        assert!(parse_address("12").is_err());
        assert!(parse_address("AB").is_err());
        assert!(parse_address("A0").is_err());
        assert!(parse_address("a1").is_err());
        assert!(parse_address("A1B").is_err());
    }
}
