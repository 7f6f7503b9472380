//! Applying live form input for a single dimension to a component record.

use serde_json::{Map, Value};

use crate::dimension::Dimension;
use crate::numeric::json_number;
use crate::value_parser::parse_dimension_value;

/// Stores what the user typed for `dimension` on `component`.
///
/// Parseable input (`"10"`, `"3/8"`, `"1 1/2"`) becomes the numeric value and
/// clears any raw input. Unparseable input keeps the value `null` and is
/// preserved, trimmed, as `raw*Input` so it can still be shown. Blank input
/// clears both. The unit is always written as a string.
pub fn apply_dimension_input(
    component: &mut Map<String, Value>,
    dimension: Dimension,
    input: &str,
    unit: &str,
) {
    let trimmed = input.trim();
    let value = parse_dimension_value(trimmed).and_then(json_number);

    match value {
        Some(number) => {
            component.insert(dimension.value_key().to_string(), Value::Number(number));
            component.remove(dimension.raw_input_key());
        }
        None => {
            component.insert(dimension.value_key().to_string(), Value::Null);
            if trimmed.is_empty() {
                component.remove(dimension.raw_input_key());
            } else {
                component.insert(
                    dimension.raw_input_key().to_string(),
                    Value::String(trimmed.to_string()),
                );
            }
        }
    }

    component.insert(
        dimension.unit_key().to_string(),
        Value::String(unit.trim().to_string()),
    );
}
