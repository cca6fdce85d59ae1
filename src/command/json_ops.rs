// src/command/json_ops.rs

use crate::error::{AppError, AppResult};

use serde_json::{Map as JsonMap, Value as JsonValue};

/// Parses `text` as a JSON document whose top level is an object. No size
/// limit: any well-formed object is accepted.
pub fn parse_object(text: &str) -> AppResult<JsonMap<String, JsonValue>> {
    let value: JsonValue =
        serde_json::from_str(text).map_err(|e| AppError::InvalidJson(e.to_string()))?;

    match value {
        JsonValue::Object(obj) => Ok(obj),
        _ => Err(AppError::JsonNotObject),
    }
}

/// Pretty form used for every rewrite of the document text (2-space indent,
/// keys in insertion order).
pub fn to_pretty_text(obj: &JsonMap<String, JsonValue>) -> AppResult<String> {
    serde_json::to_string_pretty(obj).map_err(|e| AppError::JsonSerialize(e.to_string()))
}

/// Reads a recognized field as text: missing/null is empty, strings are taken
/// as is, anything else is rendered as compact JSON.
pub fn field_text(obj: &JsonMap<String, JsonValue>, key: &str) -> String {
    match obj.get(key) {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    #[test]
    fn parse_object_accepts_objects_only() {
        assert!(parse_object(r#"{"a":1}"#).is_ok());

        match parse_object("[1,2]") {
            Err(AppError::JsonNotObject) => {}
            other => panic!("expected JsonNotObject, got: {:?}", other),
        }
        match parse_object("{not json") {
            Err(AppError::InvalidJson(_)) => {}
            other => panic!("expected InvalidJson(_), got: {:?}", other),
        }
        match parse_object("") {
            Err(AppError::InvalidJson(_)) => {}
            other => panic!("expected InvalidJson(_), got: {:?}", other),
        }
    }

    #[test]
    fn parse_object_accepts_multi_megabyte_documents() {
        let padding = "x".repeat(3 * 1024 * 1024);
        let text = format!(r#"{{"title":"Big","blob":"{padding}"}}"#);

        let obj = parse_object(&text).expect("large object parses");
        assert_eq!(field_text(&obj, "title"), "Big");
    }

    #[test]
    fn pretty_text_keeps_insertion_order() {
        let obj = parse_object(r#"{"zeta":1,"alpha":{"b":2,"a":3}}"#).unwrap();
        let text = to_pretty_text(&obj).unwrap();
        assert_eq!(
            text,
            "{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"b\": 2,\n    \"a\": 3\n  }\n}"
        );
    }

    #[test]
    fn field_text_coerces_scalars() {
        let v = json!({"s": "x", "n": 3, "b": true, "z": null});
        let obj = v.as_object().unwrap();
        assert_eq!(field_text(obj, "s"), "x");
        assert_eq!(field_text(obj, "n"), "3");
        assert_eq!(field_text(obj, "b"), "true");
        assert_eq!(field_text(obj, "z"), "");
        assert_eq!(field_text(obj, "missing"), "");
    }
}
