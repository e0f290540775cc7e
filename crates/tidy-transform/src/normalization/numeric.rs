//! Numeric parsing of text cells.

/// A parsed number, keeping track of whether it was written as an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Integer(i64),
    Float(f64),
}

/// Parse a string value as a number.
///
/// Handles:
/// - Integers: "123", "-45", "+7"
/// - Decimals and scientific notation: "-45.67", "1.23e5"
/// - Infinity: "inf", "-Infinity"
/// - Surrounding whitespace
///
/// Returns `None` for empty input, `nan` and anything unparseable. Thousands
/// separators are not accepted.
pub fn parse_number(value: &str) -> Option<ParsedNumber> {
    let trimmed = value.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }

    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(ParsedNumber::Integer(v));
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
        let v = if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(ParsedNumber::Float(v));
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .map(ParsedNumber::Float)
}

/// Parse a string value to `f64`.
pub fn parse_numeric(value: &str) -> Option<f64> {
    parse_number(value).map(|n| match n {
        ParsedNumber::Integer(v) => v as f64,
        ParsedNumber::Float(v) => v,
    })
}

/// Check if a string represents a valid numeric value.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}
