//! String attribute validators.
//!
//! Each validator is a pure function of the attribute path and its value.
//! A null or unknown value (`None`) is always accepted; presence is the
//! schema's concern, not the validator's.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::diagnostics::Diagnostic;

/// A validator attached to a string attribute in a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    Url,
    JsonObject,
    JsonArrayOfObjects,
}

impl Validator {
    pub fn validate(self, path: &str, value: Option<&str>) -> Option<Diagnostic> {
        match self {
            Validator::Url => url(path, value),
            Validator::JsonObject => json_object(path, value),
            Validator::JsonArrayOfObjects => json_array_of_objects(path, value),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Validator::Url => "validates input should be a valid URL",
            Validator::JsonObject => "validates input should be a JSON object",
            Validator::JsonArrayOfObjects => "validates input should be a JSON array of objects",
        }
    }
}

/// Accepts any absolute URL.
pub fn url(path: &str, value: Option<&str>) -> Option<Diagnostic> {
    let value = value?;
    url::Url::parse(value)
        .err()
        .map(|e| Diagnostic::attribute_error(path, "invalid URL", e.to_string()))
}

/// Accepts a JSON object (`{string → any}`). The empty string is accepted.
pub fn json_object(path: &str, value: Option<&str>) -> Option<Diagnostic> {
    let value = value.filter(|v| !v.is_empty())?;
    serde_json::from_str::<Map<String, Value>>(value)
        .err()
        .map(|e| Diagnostic::attribute_error(path, "invalid JSON object", e.to_string()))
}

/// Accepts a JSON array whose elements are all objects. The empty string is accepted.
pub fn json_array_of_objects(path: &str, value: Option<&str>) -> Option<Diagnostic> {
    let value = value.filter(|v| !v.is_empty())?;
    serde_json::from_str::<Vec<Map<String, Value>>>(value)
        .err()
        .map(|e| Diagnostic::attribute_error(path, "invalid JSON array of objects", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_accepts_absolute_urls() {
        assert!(url("url", Some("https://udf.example.com/ip")).is_none());
        assert!(url("url", Some("http://localhost:8000")).is_none());
    }

    #[test]
    fn test_url_rejects_garbage() {
        let diag = url("url", Some("not a url")).unwrap();
        assert_eq!(diag.attribute.as_deref(), Some("url"));
        assert_eq!(diag.summary, "invalid URL");
    }

    #[test]
    fn test_null_is_accepted_everywhere() {
        for v in [Validator::Url, Validator::JsonObject, Validator::JsonArrayOfObjects] {
            assert!(v.validate("x", None).is_none(), "{:?}", v);
        }
    }

    #[test]
    fn test_json_object() {
        assert!(json_object("properties", Some("")).is_none());
        assert!(json_object("properties", Some(r#"{"a":1,"b":{"c":[1]}}"#)).is_none());
        assert!(json_object("properties", Some("[]")).is_some());
        assert!(json_object("properties", Some("{")).is_some());
        assert!(json_object("properties", Some("42")).is_some());
    }

    #[test]
    fn test_json_array_of_objects() {
        assert!(json_array_of_objects("panels", Some("")).is_none());
        assert!(json_array_of_objects("panels", Some("[]")).is_none());
        assert!(json_array_of_objects("panels", Some(r#"[{"id":"p1"},{}]"#)).is_none());
        assert!(json_array_of_objects("panels", Some(r#"[{"id":"p1"}, 3]"#)).is_some());
        assert!(json_array_of_objects("panels", Some(r#"{"id":"p1"}"#)).is_some());
    }
}
