//! Numeric transforms: currency, grouping, percentages and ratios.
//!
//! All of these are best-effort. Apart from [`percentage`], a value that
//! cannot be read as a number comes back as [`NOT_AVAILABLE`] instead of an
//! error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::options::{DollarsOptions, PercentOptions, RatioOptions};
use crate::value::{format_fixed, is_blank, parse_integer, parse_number, value_to_text};
use crate::Result;

/// Sentinel for values that cannot be formatted as numbers.
pub const NOT_AVAILABLE: &str = "N/A";

static LEADING_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+)(\d{3})").expect("grouping pattern is valid"));

/// Insert a comma every three digits in the integer part of a value.
///
/// `3000` becomes `3,000` and `-1234567.891` becomes `-1,234,567.891`.
/// Text that does not start with digits passes through unchanged.
pub fn intcomma(value: &Value) -> String {
    group_digits(&value_to_text(value))
}

/// [`intcomma`] over text that is already rendered.
pub fn group_digits(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = LEADING_GROUP.replace(&current, "${1},${2}").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Largest count [`dollar_signs`] will render.
pub const MAX_DOLLAR_SIGNS: i64 = 1000;

/// Repeat `$` as many times as the value says, Yelp price-range style.
///
/// Negative counts give an empty string. Counts above
/// [`MAX_DOLLAR_SIGNS`] give [`NOT_AVAILABLE`].
pub fn dollar_signs(value: &Value) -> String {
    match parse_integer(value) {
        Ok(count) if count > MAX_DOLLAR_SIGNS => NOT_AVAILABLE.to_string(),
        Ok(count) => "$".repeat(usize::try_from(count).unwrap_or(0)),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Format an amount as dollars with grouped thousands.
///
/// Missing, zero and unparseable amounts give [`NOT_AVAILABLE`].
pub fn dollars(value: &Value, options: &DollarsOptions) -> String {
    if is_blank(value) {
        return NOT_AVAILABLE.to_string();
    }
    let amount = match parse_number(value) {
        Ok(amount) if amount != 0.0 && amount.is_finite() => amount,
        _ => return NOT_AVAILABLE.to_string(),
    };
    let places = options
        .decimal_places
        .unwrap_or(if amount.fract() == 0.0 { 0 } else { 2 });
    format!("${}", group_digits(&format_fixed(amount, places)))
}

/// Format a fraction as a percentage.
///
/// Fails with [`crate::CellfmtError::InvalidNumber`] on non-numeric input.
pub fn percentage(value: &Value, options: &PercentOptions) -> Result<String> {
    let mut number = parse_number(value)?;
    if options.multiply {
        number *= 100.0;
    }
    Ok(format!("{}%", format_fixed(number, options.decimal_places)))
}

/// Format a fraction as a signed percentage change, e.g. `+10.0%`.
///
/// Non-numeric input is taken to be a failed division upstream and
/// rendered as [`NOT_AVAILABLE`].
pub fn percent_change(value: &Value, options: &PercentOptions) -> String {
    let Ok(mut number) = parse_number(value) else {
        return NOT_AVAILABLE.to_string();
    };
    if options.multiply {
        number *= 100.0;
    }
    let formatted = format_fixed(number, options.decimal_places);
    if number > 0.0 {
        format!("+{}%", formatted)
    } else {
        format!("{}%", formatted)
    }
}

/// Format a value as an `X:1` ratio.
pub fn ratio(value: &Value, options: &RatioOptions) -> String {
    match parse_number(value) {
        Ok(number) => format!("{}:1", format_fixed(number, options.precision)),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}
