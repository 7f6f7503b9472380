//! Best-effort textual rendering of arbitrary size data.

use serde_json::Value;

use crate::numeric::format_json_number;

/// Marker older producers wrote in place of a self-reference.
const CIRCULAR_MARKER: &str = "[Circular]";

/// Renders `value` as text without ever failing.
///
/// Strings render as themselves, numbers in display form, arrays and objects
/// as compact JSON. `null` has no rendering.
#[must_use]
pub fn stringify_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(format_json_number(n)),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).ok(),
    }
}

/// Whether a rendering carries no information worth showing a user.
///
/// Covers blank text, empty containers, `null`/`undefined` spelled out, the
/// default object-to-string artifact, and circular-reference markers.
#[must_use]
pub fn is_unhelpful(rendered: &str) -> bool {
    let trimmed = rendered.trim();
    trimmed.is_empty()
        || trimmed.contains(CIRCULAR_MARKER)
        || matches!(
            trimmed,
            "[object Object]" | "{}" | "[]" | "null" | "undefined" | "\"\""
        )
}

/// [`stringify_value`] filtered through [`is_unhelpful`].
pub(crate) fn helpful_rendering(value: &Value) -> Option<String> {
    stringify_value(value).filter(|rendered| !is_unhelpful(rendered))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strings_render_verbatim() {
        assert_eq!(stringify_value(&json!("10 x 5 mm")).as_deref(), Some("10 x 5 mm"));
    }

    #[test]
    fn numbers_render_in_display_form() {
        assert_eq!(stringify_value(&json!(12)).as_deref(), Some("12"));
        assert_eq!(stringify_value(&json!(12.0)).as_deref(), Some("12"));
        assert_eq!(stringify_value(&json!(0.5)).as_deref(), Some("0.5"));
    }

    #[test]
    fn objects_render_as_json() {
        assert_eq!(
            stringify_value(&json!({ "foo": 1 })).as_deref(),
            Some(r#"{"foo":1}"#)
        );
        assert_eq!(stringify_value(&json!([1, "a"])).as_deref(), Some(r#"[1,"a"]"#));
    }

    #[test]
    fn null_has_no_rendering() {
        assert!(stringify_value(&Value::Null).is_none());
    }

    #[test]
    fn unhelpful_renderings_are_detected() {
        for rendered in [
            "",
            "   ",
            "[object Object]",
            "{}",
            "[]",
            "null",
            "undefined",
            r#"{"self":"[Circular]"}"#,
        ] {
            assert!(is_unhelpful(rendered), "{rendered:?}");
        }
    }

    #[test]
    fn meaningful_renderings_are_kept() {
        assert!(!is_unhelpful("M8"));
        assert!(!is_unhelpful(r#"{"foo":1}"#));
        assert!(!is_unhelpful("0"));
    }

    #[test]
    fn helpful_rendering_discards_empty_containers() {
        assert!(helpful_rendering(&json!({})).is_none());
        assert!(helpful_rendering(&json!([])).is_none());
        assert_eq!(helpful_rendering(&json!("M8")).as_deref(), Some("M8"));
    }
}
