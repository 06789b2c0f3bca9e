//! Webhook reply normalization.
//!
//! Endpoints behind the widget are wired up by users, so the reply shape
//! is whatever their automation tool produces: an array of items with an
//! `output` field, a bare object with one of several well-known fields,
//! or a plain string. Normalization runs an ordered rule table over the
//! decoded payload; the first rule that extracts a string wins, and a
//! serialization fallback guarantees the caller always gets text.

use serde_json::Value;

/// Returned when even JSON serialization of the payload fails.
pub const UNRENDERABLE: &str = "[unrenderable response]";

struct Rule {
    name: &'static str,
    extract: fn(&Value) -> Option<String>,
}

/// Priority order matters: `response` beats `message` beats `output`
/// beats `data.content`, and the array form beats them all.
const RULES: &[Rule] = &[
    Rule {
        name: "array_output",
        extract: array_output,
    },
    Rule {
        name: "field_response",
        extract: |v| string_field(v, "response"),
    },
    Rule {
        name: "field_message",
        extract: |v| string_field(v, "message"),
    },
    Rule {
        name: "field_output",
        extract: |v| string_field(v, "output"),
    },
    Rule {
        name: "data_content",
        extract: data_content,
    },
    Rule {
        name: "bare_string",
        extract: |v| v.as_str().map(String::from),
    },
];

/// Map an arbitrary decoded payload to a display string. Total: never
/// panics and never returns an error.
pub fn normalize(payload: &Value) -> String {
    for rule in RULES {
        if let Some(text) = (rule.extract)(payload) {
            tracing::debug!(rule = rule.name, "reply shape matched");
            return text;
        }
    }

    serde_json::to_string(payload).unwrap_or_else(|_| UNRENDERABLE.to_string())
}

/// The shape n8n-style workflows return: `[{"output": "..."}]`. The
/// first element carrying a string `output` wins, trimmed.
fn array_output(payload: &Value) -> Option<String> {
    payload.as_array().and_then(|items| {
        items
            .iter()
            .find_map(|item| item["output"].as_str())
            .map(|s| s.trim().to_string())
    })
}

fn string_field(payload: &Value, field: &str) -> Option<String> {
    payload
        .as_object()
        .and_then(|obj| obj.get(field))
        .and_then(Value::as_str)
        .map(String::from)
}

fn data_content(payload: &Value) -> Option<String> {
    payload
        .as_object()
        .and_then(|obj| obj.get("data"))
        .and_then(|data| data.get("content"))
        .and_then(Value::as_str)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_output_is_trimmed() {
        let payload = json!([{"output": "  hello there  "}]);
        assert_eq!(normalize(&payload), "hello there");
    }

    #[test]
    fn array_skips_elements_without_output() {
        let payload = json!([{"other": 1}, {"output": "second"}]);
        assert_eq!(normalize(&payload), "second");
    }

    #[test]
    fn empty_array_falls_through_to_serialization() {
        assert_eq!(normalize(&json!([])), "[]");
    }

    #[test]
    fn each_object_field_is_extracted_verbatim() {
        assert_eq!(normalize(&json!({"response": " r "})), " r ");
        assert_eq!(normalize(&json!({"message": "m"})), "m");
        assert_eq!(normalize(&json!({"output": "o"})), "o");
        assert_eq!(normalize(&json!({"data": {"content": "c"}})), "c");
    }

    #[test]
    fn field_priority_response_wins() {
        let payload = json!({
            "response": "r",
            "message": "m",
            "output": "o",
            "data": {"content": "c"},
        });
        assert_eq!(normalize(&payload), "r");
    }

    #[test]
    fn field_priority_message_beats_output() {
        let payload = json!({"message": "m", "output": "o", "data": {"content": "c"}});
        assert_eq!(normalize(&payload), "m");
    }

    #[test]
    fn field_priority_output_beats_data_content() {
        let payload = json!({"output": "o", "data": {"content": "c"}});
        assert_eq!(normalize(&payload), "o");
    }

    #[test]
    fn bare_string_is_returned_unchanged() {
        assert_eq!(normalize(&json!("  as is  ")), "  as is  ");
    }

    #[test]
    fn null_and_numbers_serialize() {
        assert_eq!(normalize(&Value::Null), "null");
        assert_eq!(normalize(&json!(42)), "42");
    }

    #[test]
    fn non_string_well_known_fields_fall_through() {
        // `response` holds a number, so serialization kicks in.
        let payload = json!({"response": 7});
        assert_eq!(normalize(&payload), r#"{"response":7}"#);
    }

    #[test]
    fn unknown_object_serializes() {
        let payload = json!({"weird": true});
        assert_eq!(normalize(&payload), r#"{"weird":true}"#);
    }
}
