//! Tests for column letters and "A1"-style addresses.
//!
//! Column letters are bijective base-26 (`Z` = 26, `AA` = 27); addresses pair
//! them with a 1-based row number.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use sheetgrid::cell_ref::{cell_address, column_to_letter, letter_to_column, parse_address};
use sheetgrid::GridError;
use test_case::test_case;

#[test_case(1, "A" ; "first column")]
#[test_case(26, "Z" ; "last single letter")]
#[test_case(27, "AA" ; "first double letter")]
#[test_case(28, "AB" ; "second double letter")]
#[test_case(52, "AZ" ; "az")]
#[test_case(53, "BA" ; "ba")]
#[test_case(702, "ZZ" ; "last double letter")]
#[test_case(703, "AAA" ; "first triple letter")]
#[test_case(16_384, "XFD" ; "excel max column")]
fn test_column_letters(column: i64, letters: &str) {
    assert_eq!(column_to_letter(column), letters);
    assert_eq!(letter_to_column(letters).unwrap(), column);
}

#[test_case(0 ; "zero")]
#[test_case(-1 ; "negative")]
fn test_non_positive_column_is_empty(column: i64) {
    assert_eq!(column_to_letter(column), "");
}

#[test]
fn test_empty_letters_decode_to_zero() {
    assert_eq!(letter_to_column("").unwrap(), 0);
}

#[test_case("a" ; "lowercase")]
#[test_case("A1" ; "digit")]
#[test_case("$A" ; "anchor")]
#[test_case("Ä" ; "non ascii")]
fn test_invalid_letters_rejected(letters: &str) {
    assert!(matches!(
        letter_to_column(letters),
        Err(GridError::InvalidAddress(_))
    ));
}

#[test]
fn test_overlong_letters_rejected() {
    let letters = "Z".repeat(20);
    assert!(letter_to_column(&letters).is_err());
}

#[test]
fn test_round_trip_through_three_letters() {
    for column in 1..=18_278 {
        let letters = column_to_letter(column);
        assert_eq!(letter_to_column(&letters).unwrap(), column, "{letters}");
    }
}

#[test_case(0, 0, "A1")]
#[test_case(2, 1, "B3")]
#[test_case(9, 26, "AA10")]
fn test_address_round_trip(row: u32, col: u32, address: &str) {
    assert_eq!(cell_address(row, col), address);
    assert_eq!(parse_address(address).unwrap(), (row, col));
}

#[test_case("" ; "empty")]
#[test_case("A" ; "no row")]
#[test_case("12" ; "no column")]
#[test_case("A0" ; "row zero")]
#[test_case("b2" ; "lowercase")]
#[test_case("$A$1" ; "anchored")]
#[test_case("A1B" ; "trailing letters")]
fn test_bad_addresses(address: &str) {
    assert!(parse_address(address).is_err(), "{address}");
}
