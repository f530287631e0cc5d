//! Human-readable count parsing
//!
//! View and comment counts arrive as display strings such as `"38K"`,
//! `"1.2K views"` or `"1,024"`. This module turns them into numbers.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("count pattern is valid"));

/// Multiplier applied when a count carries the thousands suffix
pub const THOUSANDS_MULTIPLIER: f64 = 1000.0;

/// Errors from count parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountParseError {
    /// No digits were found in the input
    #[error("Invalid count format: {0:?}")]
    InvalidFormat(String),
}

/// Parse a human-readable count
///
/// Thousands separators (`,`) are removed, then the first run of digits
/// (optionally with a fractional part) is taken. If the input string
/// contains an uppercase `K` the value is multiplied by 1000.
///
/// # Errors
/// Returns [`CountParseError::InvalidFormat`] when the input has no digits.
pub fn parse_count(raw: &str) -> Result<f64, CountParseError> {
    let cleaned = raw.replace(',', "");
    let value = NUMBER_REGEX
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| CountParseError::InvalidFormat(raw.to_string()))?;

    if raw.contains('K') {
        Ok(value * THOUSANDS_MULTIPLIER)
    } else {
        Ok(value)
    }
}

/// Parse a count, treating malformed input as zero
pub fn count_or_zero(raw: &str) -> f64 {
    match parse_count(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::trace!(error = %e, "Malformed count treated as zero");
            0.0
        }
    }
}
