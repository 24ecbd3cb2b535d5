//! Roman numerals for scene labels.

use crate::errors::{FolioError, FolioResult};

/// Largest value with a standard Roman representation.
pub const MAX_ROMAN: i64 = 3999;

const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Converts `n` to an uppercase Roman numeral.
///
/// Each decimal digit is looked up in its own table and the pieces are joined
/// most significant first. `0` maps to the empty string.
///
/// # Errors
///
/// [`FolioError::OutOfRange`] when `n` is negative or greater than 3999.
pub fn to_roman(n: i64) -> FolioResult<String> {
    if !(0..=MAX_ROMAN).contains(&n) {
        return Err(FolioError::OutOfRange { value: n });
    }
    // In range, so every index below is a single decimal digit.
    let n = n as usize;
    let mut numeral = String::with_capacity(15);
    numeral.push_str(THOUSANDS[n / 1000]);
    numeral.push_str(HUNDREDS[(n % 1000) / 100]);
    numeral.push_str(TENS[(n % 100) / 10]);
    numeral.push_str(ONES[n % 10]);
    Ok(numeral)
}

/// Converts a 1-based position (act or scene number) to a numeral.
pub(crate) fn position_numeral(position: usize) -> FolioResult<String> {
    let value = i64::try_from(position).unwrap_or(i64::MAX);
    to_roman(value)
}
