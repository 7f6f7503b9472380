//! One-line size strings for the quote table and the PDF export.
//!
//! Both call sites must print the same text for the same data, whether the
//! component is still in a legacy shape or already canonical, so this module
//! is the single implementation they share.

use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, NoopSink, Stage};
use crate::dimension::Dimension;
use crate::normalize::raw_input_text;
use crate::numeric::format_json_number;
use crate::stringify::helpful_rendering;

/// Printed when a component carries no usable size information.
pub const EMPTY_SIZE: &str = "-";

/// Formats a component's size, discarding diagnostics.
///
/// See [`format_size_with`].
#[must_use]
pub fn format_size(component: &Value) -> String {
    format_size_with(component, &NoopSink)
}

/// Formats a component's size as display text.
///
/// Priority, first match wins:
/// 1. a string or number `sizeValue`, followed by `sizeUnit` when set;
/// 2. an object or array `sizeValue`: its canonical dimension keys as
///    labelled segments, else the component's `rawSizeString`, else a
///    helpful stringification of the `sizeValue`;
/// 3. the component's own canonical dimension fields, falling back per
///    dimension to its `raw*Input`;
/// 4. [`EMPTY_SIZE`].
///
/// Segments read `L: 10 mm`, `Ø: 5 mm`, `W: 2 mm` and are joined with ` / `.
#[must_use]
pub fn format_size_with(component: &Value, sink: &dyn DiagnosticSink) -> String {
    let Some(fields) = component.as_object() else {
        return EMPTY_SIZE.to_string();
    };

    match fields.get("sizeValue") {
        Some(Value::String(text)) if !text.trim().is_empty() => {
            return with_unit(text, fields.get("sizeUnit"));
        }
        Some(Value::Number(number)) => {
            return with_unit(&format_json_number(number), fields.get("sizeUnit"));
        }
        Some(size @ (Value::Object(_) | Value::Array(_))) => {
            if let Some(text) = format_size_object(size, fields, sink) {
                return text;
            }
        }
        _ => {}
    }

    let segments = segments(|dimension| {
        let value = fields
            .get(dimension.value_key())
            .and_then(display_value)
            .or_else(|| {
                fields
                    .get(dimension.raw_input_key())
                    .and_then(raw_input_text)
            })?;
        Some((value, fields.get(dimension.unit_key())))
    });

    if segments.is_empty() {
        EMPTY_SIZE.to_string()
    } else {
        segments.join(" / ")
    }
}

/// Step 2 of [`format_size_with`]. `None` means fall through to the
/// component's flat fields.
fn format_size_object(
    size: &Value,
    component: &Map<String, Value>,
    sink: &dyn DiagnosticSink,
) -> Option<String> {
    let segments = segments(|dimension| {
        let value = size.get(dimension.value_key()).and_then(display_value)?;
        Some((value, size.get(dimension.unit_key())))
    });
    if !segments.is_empty() {
        return Some(segments.join(" / "));
    }

    if let Some(raw) = component
        .get("rawSizeString")
        .and_then(Value::as_str)
        .filter(|raw| !raw.trim().is_empty())
    {
        return Some(raw.to_string());
    }

    let rendered = helpful_rendering(size);
    if rendered.is_none() {
        sink.report(&Diagnostic {
            stage: Stage::Format,
            kind: DiagnosticKind::UnrenderableSize,
            raw: size,
        });
    }
    rendered
}

/// Builds the labelled segments for every dimension `lookup` finds, in
/// length, diameter, width order.
fn segments<'a, F>(lookup: F) -> Vec<String>
where
    F: Fn(Dimension) -> Option<(String, Option<&'a Value>)>,
{
    Dimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let (value, unit) = lookup(dimension)?;
            Some(format!(
                "{}: {}",
                dimension.label(),
                with_unit(&value, unit)
            ))
        })
        .collect()
}

fn with_unit(value: &str, unit: Option<&Value>) -> String {
    match unit.and_then(Value::as_str).filter(|u| !u.trim().is_empty()) {
        Some(unit) => format!("{value} {unit}"),
        None => value.to_string(),
    }
}

/// Display text for a stored dimension value; `None` when it has none.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()).filter(|s| !s.trim().is_empty()),
        Value::Number(n) => Some(format_json_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => helpful_rendering(value),
    }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
