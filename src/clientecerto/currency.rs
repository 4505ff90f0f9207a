//! Monetary input formatting and parsing.
//!
//! Input follows the "cents typing" convention: the digit string the user has
//! typed so far is an integer number of cents, so every new digit shifts the
//! value up one decimal place. There is no decimal-point parsing on the way
//! in; the comma is purely an output separator.

use crate::error::{ClienteError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalizes raw keystroke input into a `D,DD` currency string.
///
/// Non-digits are stripped and the remaining digits are read as cents, so
/// `""` gives `"0,00"`, `"5"` gives `"0,05"` and `"12345"` gives `"123,45"`.
/// Feeding the output back in reproduces it.
pub fn format_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_start_matches('0');

    match digits.len() {
        0 => "0,00".to_string(),
        1 => format!("0,0{}", digits),
        2 => format!("0,{}", digits),
        n => format!("{},{}", &digits[..n - 2], &digits[n - 2..]),
    }
}

/// Parses a comma-decimal currency string into a `Decimal`, rounded to two
/// fractional digits. The inverse of [`format_input`] on its output.
pub fn parse_amount(formatted: &str) -> Result<Decimal> {
    let normalized = formatted.trim().replace(',', ".");
    let value = Decimal::from_str(&normalized)
        .map_err(|_| ClienteError::Validation(format!("Not a monetary amount: {}", formatted)))?;
    Ok(value.round_dp(2))
}

/// Renders a stored amount back to its canonical `D,DD` form.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value).replace('.', ",")
}
