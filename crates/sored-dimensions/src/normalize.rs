//! Reduction of every historical component size shape to the canonical one.
//!
//! Size data has been written by several incompatible generations of the
//! quoting app: nested `sizeValue` objects, JSON-encoded strings, arrays,
//! abbreviated or Portuguese key names, and bare primitives. Normalization
//! never fails; anything unusable degrades to `null` values or to an absent
//! `rawSizeString`.

use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, NoopSink, Stage};
use crate::dimension::{Dimension, NormalizedDimensions};
use crate::numeric::{coerce_number, format_json_number};
use crate::stringify::{helpful_rendering, stringify_value};

/// Sub-objects older producers nested the real dimensions under. Merged in
/// this order, so `size` wins over `dimensions`, and both win over the
/// enclosing object.
const NESTED_SIZE_KEYS: [&str; 2] = ["dimensions", "size"];

/// Generic unit key some legacy size objects carry for all dimensions.
const SHARED_UNIT_KEY: &str = "unit";

/// Normalizes one component, discarding diagnostics.
///
/// See [`normalize_component_with`].
#[must_use]
pub fn normalize_component(raw: &Value) -> Value {
    normalize_component_with(raw, &NoopSink)
}

/// Normalizes one component into the canonical shape.
///
/// The result is `raw` with `lengthValue`/`diameterValue`/`widthValue`
/// (number or `null`), their `*Unit` strings, any surviving `raw*Input`
/// strings, and `rawSizeString` overlaid. All other keys, `sizeValue`
/// included, pass through unchanged. Non-object input is returned as is.
///
/// Normalizing an already-normalized component returns it unchanged.
#[must_use]
pub fn normalize_component_with(raw: &Value, sink: &dyn DiagnosticSink) -> Value {
    let Value::Object(fields) = raw else {
        return raw.clone();
    };

    let dimensions = resolve(fields, sink);
    let mut normalized = fields.clone();
    dimensions.overlay(&mut normalized);
    Value::Object(normalized)
}

/// Resolves the typed dimensions of a component without building the
/// canonical record. Returns `None` for non-object input.
#[must_use]
pub fn resolve_dimensions(raw: &Value) -> Option<NormalizedDimensions> {
    raw.as_object().map(|fields| resolve(fields, &NoopSink))
}

fn resolve(component: &Map<String, Value>, sink: &dyn DiagnosticSink) -> NormalizedDimensions {
    let size = component
        .get("sizeValue")
        .and_then(|value| unwrap_size_value(value, sink));
    let size_fields = size.as_ref().and_then(Value::as_object);

    let mut dimensions = NormalizedDimensions::default();
    for dimension in Dimension::ALL {
        let slot = dimensions.slot_mut(dimension);
        slot.value = match first_present(size_fields, dimension.value_candidates()) {
            Some(candidate) => coerce_number(candidate),
            None => component.get(dimension.value_key()).and_then(coerce_number),
        };
        slot.unit = resolve_unit(dimension, size_fields, component);
        if slot.value.is_none() {
            slot.raw_input = resolve_raw_input(dimension, size_fields, component);
        }
    }

    if dimensions.is_empty() {
        if let Some(size) = size.as_ref().filter(|size| has_content(size)) {
            dimensions.raw_size_string = synthesize_raw_size_string(size);
            if dimensions.raw_size_string.is_none() {
                sink.report(&Diagnostic {
                    stage: Stage::Normalize,
                    kind: DiagnosticKind::UnrenderableSize,
                    raw: component.get("sizeValue").unwrap_or(size),
                });
            }
        }
    }

    dimensions
}

/// Peels the legacy wrappers off a `sizeValue`: JSON-encoded strings are
/// decoded, arrays give up their first object (or first element), and one
/// level of `dimensions`/`size` nesting is flattened.
fn unwrap_size_value(value: &Value, sink: &dyn DiagnosticSink) -> Option<Value> {
    let mut size = match value {
        Value::Null => return None,
        Value::String(text) => decode_json_string(text, value, sink),
        other => other.clone(),
    };

    if let Value::Array(items) = &size {
        let first = items
            .iter()
            .find(|item| item.is_object())
            .or_else(|| items.first())
            .cloned();
        if let Some(first) = first {
            size = first;
        }
    }

    if let Value::Object(fields) = &mut size {
        let nested: Vec<Map<String, Value>> = NESTED_SIZE_KEYS
            .iter()
            .filter_map(|key| fields.get(*key).and_then(Value::as_object).cloned())
            .collect();
        for inner in nested {
            fields.extend(inner);
        }
    }

    Some(size)
}

/// Decodes a JSON-encoded object or array; any other string is kept as is.
fn decode_json_string(text: &str, original: &Value, sink: &dyn DiagnosticSink) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(parsed @ (Value::Object(_) | Value::Array(_))) => parsed,
        Ok(_) => original.clone(),
        Err(_) => {
            let trimmed = text.trim_start();
            if trimmed.starts_with('{') || trimmed.starts_with('[') {
                sink.report(&Diagnostic {
                    stage: Stage::Normalize,
                    kind: DiagnosticKind::UnparseableJson,
                    raw: original,
                });
            }
            original.clone()
        }
    }
}

/// First candidate key holding a usable value. `null` and blank strings
/// count as absent.
fn first_present<'a>(
    fields: Option<&'a Map<String, Value>>,
    candidates: &[&str],
) -> Option<&'a Value> {
    let fields = fields?;
    candidates
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn non_blank_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

fn resolve_unit(
    dimension: Dimension,
    size_fields: Option<&Map<String, Value>>,
    component: &Map<String, Value>,
) -> String {
    size_fields
        .and_then(|fields| {
            dimension
                .unit_candidates()
                .iter()
                .chain(std::iter::once(&SHARED_UNIT_KEY))
                .find_map(|key| fields.get(*key).and_then(non_blank_str))
        })
        .or_else(|| {
            component
                .get(dimension.unit_key())
                .and_then(non_blank_str)
        })
        .unwrap_or_default()
        .to_string()
}

fn resolve_raw_input(
    dimension: Dimension,
    size_fields: Option<&Map<String, Value>>,
    component: &Map<String, Value>,
) -> Option<String> {
    component
        .get(dimension.raw_input_key())
        .and_then(raw_input_text)
        .or_else(|| {
            let fields = size_fields?;
            dimension
                .raw_input_candidates()
                .iter()
                .find_map(|key| fields.get(*key).and_then(raw_input_text))
        })
}

/// Text of a stored raw input. Older producers wrote bare numbers here.
pub(crate) fn raw_input_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(format_json_number(n)),
        _ => None,
    }
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

fn synthesize_raw_size_string(size: &Value) -> Option<String> {
    match size {
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::Array(_) | Value::Object(_) => helpful_rendering(item),
                    primitive => stringify_value(primitive).filter(|s| !s.trim().is_empty()),
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" / "))
            }
        }
        other => helpful_rendering(other),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
