//! Fraction-aware parsing of freeform dimension tokens such as `"1 1/2"`.
//!
//! The parser only understands the number itself; unit suffixes must be
//! removed by the caller.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)$").expect("valid decimal regex"));

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)/([0-9]+)$").expect("valid fraction regex"));

static MIXED_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s+([0-9]+)/([0-9]+)$").expect("valid mixed fraction regex")
});

/// Parses a dimension token into a number.
///
/// Accepted shapes, after trimming:
/// - integers and decimals: `"10"`, `"2.5"`, `".75"`
/// - simple fractions: `"3/8"`
/// - mixed fractions: `"1 1/2"` (any run of whitespace between the parts)
///
/// Returns `None` for empty input, a zero denominator, and anything else.
/// There is no partial parsing: `"10a"` is rejected, not read as `10`.
#[must_use]
pub fn parse_dimension_value(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if DECIMAL.is_match(trimmed) {
        return trimmed.parse::<f64>().ok();
    }

    if let Some(caps) = FRACTION.captures(trimmed) {
        return divide(&caps[1], &caps[2]);
    }

    if let Some(caps) = MIXED_FRACTION.captures(trimmed) {
        let whole = caps[1].parse::<f64>().ok()?;
        return divide(&caps[2], &caps[3]).map(|fraction| whole + fraction);
    }

    None
}

#[allow(clippy::float_cmp)]
fn divide(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}
