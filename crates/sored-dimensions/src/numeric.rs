//! Number coercion and display shared by the normalizer and the formatter.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

static STRIP_NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}%\s]").expect("valid strip regex"));

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("valid leading float regex")
});

/// Coerces a stored dimension value to a number.
///
/// Numbers pass through untouched. Strings lose their letters, percent signs
/// and whitespace (so `"10 mm"` becomes `10`), then the longest leading
/// decimal is taken. This is deliberately not fraction-aware: `"1/2"` yields
/// `1`. Everything else is `None`.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let stripped = STRIP_NON_NUMERIC.replace_all(s, "");
            let leading = LEADING_FLOAT.find(&stripped)?;
            leading
                .as_str()
                .parse::<f64>()
                .ok()
                .and_then(json_number)
        }
        _ => None,
    }
}

/// Builds a JSON number, preferring an integer representation when `value`
/// is integral so canonical data serializes as `10` rather than `10.0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn json_number(value: f64) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

/// Renders a number the way the quote UI always has: integral values without
/// a fractional part, everything else in shortest round-trip form. Magnitudes
/// below `1e-6` or from `1e21` up use exponent form (`1e-7`, `1e+21`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return exponent_form(value);
    }
    value.to_string()
}

fn exponent_form(value: f64) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// [`format_number`] for a JSON number, keeping integers exact.
#[must_use]
pub fn format_json_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    number
        .as_f64()
        .map_or_else(|| number.to_string(), format_number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn coerce_passes_numbers_through() {
        assert_eq!(coerce_number(&json!(10)), Some(Number::from(10)));
        assert_eq!(coerce_number(&json!(2.5)), Number::from_f64(2.5));
    }

    #[test]
    fn coerce_strips_units_and_spaces() {
        assert_eq!(coerce_number(&json!("10 mm")), Some(Number::from(10)));
        assert_eq!(coerce_number(&json!(" 12.5cm ")), Number::from_f64(12.5));
        assert_eq!(coerce_number(&json!("50%")), Some(Number::from(50)));
    }

    #[test]
    fn coerce_takes_leading_decimal_only() {
        assert_eq!(coerce_number(&json!("1/2")), Some(Number::from(1)));
        assert_eq!(coerce_number(&json!("3,5")), Some(Number::from(3)));
        assert_eq!(coerce_number(&json!(".75")), Number::from_f64(0.75));
    }

    #[test]
    fn coerce_rejects_non_numeric() {
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("   ")), None);
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("/2")), None);
        assert_eq!(coerce_number(&Value::Null), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!({ "value": 1 })), None);
        assert_eq!(coerce_number(&json!([1])), None);
    }

    #[test]
    fn json_number_prefers_integers() {
        assert_eq!(json_number(10.0), Some(Number::from(10)));
        assert_eq!(json_number(0.5), Number::from_f64(0.5));
        assert_eq!(json_number(f64::NAN), None);
        assert_eq!(json_number(f64::INFINITY), None);
    }

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.375), "0.375");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn format_number_uses_exponent_outside_plain_range() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-7), "-2.5e-7");
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(123_456_789_012_345_680_000.0), "123456789012345680000");
    }

    #[test]
    fn coerce_stops_at_non_ascii_digits() {
        assert_eq!(coerce_number(&json!("5\u{663}")), Some(Number::from(5)));
        assert_eq!(coerce_number(&json!("\u{663}")), None);
    }

    #[test]
    fn format_json_number_handles_both_representations() {
        assert_eq!(format_json_number(&Number::from(10)), "10");
        assert_eq!(format_json_number(&Number::from_f64(10.0).unwrap()), "10");
        assert_eq!(format_json_number(&Number::from_f64(2.25).unwrap()), "2.25");
    }
}
