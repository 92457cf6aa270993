//! Conversion between statement amount tokens and decimals.
//!
//! Statements print amounts with `.` as the thousands separator and `,` as
//! the decimal comma, with an optional leading `-`:
//!   -1.234,56     10.000,00     0,50

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ParseFailure;

pub const OUT_OF_RANGE: &str = "out of range (more than 28 significant digits)";

/// Which numeric column of a statement line a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountField {
    Amount,
    Balance,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Amount => f.write_str("amount"),
            AmountField::Balance => f.write_str("balance"),
        }
    }
}

/// Convert a statement token into a signed decimal.
///
/// All `.` are dropped, then `,` becomes the decimal point. An empty token
/// is zero. Anything else that does not end up as `[-]digits[.digits]`
/// is a [`ParseFailure`], as is a well-formed number whose integer part
/// needs more than the 28 significant digits a `Decimal` holds.
pub fn parse_amount(field: AmountField, token: &str) -> Result<Decimal, ParseFailure> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let normalized = token.replace('.', "").replace(',', ".");
    let (negative, magnitude) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.as_str()),
    };

    if magnitude.contains('-') {
        return Err(ParseFailure::new(field, token, "misplaced or repeated sign"));
    }
    if magnitude.matches('.').count() > 1 {
        return Err(ParseFailure::new(field, token, "more than one decimal comma"));
    }
    if let Some(bad) = magnitude.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(ParseFailure::new(field, token, format!("unexpected character '{bad}'")));
    }
    if !magnitude.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseFailure::new(field, token, "no digits"));
    }

    // ",50" and "5," are accepted as 0.50 and 5
    let mut candidate = String::with_capacity(magnitude.len() + 2);
    if negative {
        candidate.push('-');
    }
    if magnitude.starts_with('.') {
        candidate.push('0');
    }
    candidate.push_str(magnitude.strip_suffix('.').unwrap_or(magnitude));

    // the shape is valid by now, so the only rejection left is range
    Decimal::from_str(&candidate).map_err(|_| ParseFailure::new(field, token, OUT_OF_RANGE))
}

/// Format a decimal the way statements print it: `-1.234,56`.
///
/// The decimal's own scale is kept, so `10000.00` prints as `10.000,00`.
pub fn format_amount(value: Decimal) -> String {
    let plain = value.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}
