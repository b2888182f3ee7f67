//! User-defined function models.
//!
//! Remote (webhook) and JavaScript functions share `/udfs` and one wire type,
//! discriminated by `type`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ApiResource;
use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UdfType {
    #[default]
    Javascript,
    Remote,
    /// Any other function kind the server knows about (e.g. SQL functions).
    #[serde(other)]
    Other,
}

impl fmt::Display for UdfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UdfType::Javascript => "javascript",
            UdfType::Remote => "remote",
            UdfType::Other => "other",
        })
    }
}

/// How a remote function authenticates against its webhook.
///
/// The server reports "no auth" either as `none` or as an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UdfAuthMethod {
    #[serde(rename = "auth_header")]
    AuthHeader,
    #[default]
    #[serde(rename = "none", alias = "")]
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdfArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub arg_type: String,
}

/// Header sent to a remote function's webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdfAuthContext {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_value: String,
}

/// A user-defined function as exchanged with `/udfs`. The name is the identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Udf {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type")]
    pub udf_type: UdfType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arguments: Vec<UdfArgument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub return_type: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<UdfAuthMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_context: Option<UdfAuthContext>,
    #[serde(
        rename = "is_aggregation",
        default,
        skip_serializing_if = "is_false",
        deserialize_with = "null_as_default"
    )]
    pub is_aggregation: bool,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub source: String,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl Udf {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the server reports header auth for this function.
    pub fn uses_auth_header(&self) -> bool {
        matches!(self.auth_method, Some(UdfAuthMethod::AuthHeader))
    }
}

impl ApiResource for Udf {
    fn path(&self) -> &'static str {
        "udfs"
    }

    fn id(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_auth_method_reads_as_none() {
        let udf: Udf = serde_json::from_value(json!({
            "name": "f",
            "type": "remote",
            "url": "https://fn.example/hook",
            "auth_method": "",
            "return_type": "float64",
            "arguments": [{"name": "x", "type": "float64"}]
        }))
        .unwrap();
        assert_eq!(udf.auth_method, Some(UdfAuthMethod::None));
        assert!(!udf.uses_auth_header());
        assert_eq!(udf.udf_type, UdfType::Remote);
    }

    #[test]
    fn test_unknown_udf_type_is_other() {
        let udf: Udf = serde_json::from_value(json!({"name": "f", "type": "sql"})).unwrap();
        assert_eq!(udf.udf_type, UdfType::Other);
    }

    #[test]
    fn test_javascript_body_omits_remote_fields() {
        let udf = Udf {
            name: "add_one".to_string(),
            udf_type: UdfType::Javascript,
            return_type: "int64".to_string(),
            source: "function add_one(x) { return x.map(v => v + 1); }".to_string(),
            ..Udf::default()
        };
        let body = serde_json::to_value(&udf).unwrap();
        assert_eq!(body["type"], "javascript");
        assert!(body.get("url").is_none());
        assert!(body.get("auth_method").is_none());
        assert!(body.get("is_aggregation").is_none());
    }
}
