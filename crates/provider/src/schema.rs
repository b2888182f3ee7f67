//! Resource and data source schemas.
//!
//! A [`Schema`] declares the attributes a resource exposes, their kind
//! (required, optional, computed), secrecy, validators, plan modifiers, and
//! defaults, plus nested list blocks such as a stream's `column`.
//!
//! Schemas are built fluently:
//!
//! ```
//! use timeplus_provider::schema::{Attribute, Block, Schema};
//!
//! let schema = Schema::new("A stream")
//!     .with_attribute("name", Attribute::required_string().requires_replace())
//!     .with_block(
//!         "column",
//!         Block::list("Columns").with_attribute("name", Attribute::required_string()),
//!     );
//! assert!(schema.attribute("name").unwrap().required);
//! ```
//!
//! # What this module handles:
//! - Static validation of a configuration object against the schema
//!
//! # What this module does NOT handle:
//! - Entity-specific preconditions (each resource's `validate`)
//! - Plan computation (see [`crate::plan`])

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::validators::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanModifier {
    /// A change to this attribute destroys and recreates the resource.
    RequiresReplace,
    /// A computed attribute absent from config keeps its prior state value.
    UseStateForUnknown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Bool,
    /// A single nested object with its own attributes.
    Object {
        attributes: BTreeMap<String, Attribute>,
    },
    /// A list of nested objects, computed by data sources.
    List {
        attributes: BTreeMap<String, Attribute>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(flatten)]
    pub kind: AttributeType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Attribute {
    fn new(kind: AttributeType, required: bool, optional: bool, computed: bool) -> Self {
        Self {
            kind,
            description: String::new(),
            required,
            optional,
            computed,
            sensitive: false,
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
            default: None,
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeType::String, true, false, false)
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, false, true, false)
    }

    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, false, false, true)
    }

    pub fn optional_computed_string() -> Self {
        Self::new(AttributeType::String, false, true, true)
    }

    pub fn optional_int64() -> Self {
        Self::new(AttributeType::Int64, false, true, false)
    }

    pub fn optional_computed_int64() -> Self {
        Self::new(AttributeType::Int64, false, true, true)
    }

    pub fn computed_int64() -> Self {
        Self::new(AttributeType::Int64, false, false, true)
    }

    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool, false, true, false)
    }

    pub fn computed_bool() -> Self {
        Self::new(AttributeType::Bool, false, false, true)
    }

    pub fn optional_object(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::new(AttributeType::Object { attributes }, false, true, false)
    }

    pub fn computed_object(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::new(AttributeType::Object { attributes }, false, false, true)
    }

    pub fn computed_list(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::new(AttributeType::List { attributes }, false, false, true)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn requires_replace(mut self) -> Self {
        self.plan_modifiers.push(PlanModifier::RequiresReplace);
        self
    }

    pub fn use_state_for_unknown(mut self) -> Self {
        self.plan_modifiers.push(PlanModifier::UseStateForUnknown);
        self
    }

    /// Static default applied when the configuration leaves the attribute null.
    ///
    /// An attribute with a default is always computed.
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self.computed = true;
        self
    }

    pub fn has_modifier(&self, modifier: PlanModifier) -> bool {
        self.plan_modifiers.contains(&modifier)
    }

    /// Whether the user may set this attribute in configuration.
    pub fn is_configurable(&self) -> bool {
        self.required || self.optional
    }

    fn type_matches(&self, value: &Value) -> bool {
        match (&self.kind, value) {
            (_, Value::Null) => true,
            (AttributeType::String, Value::String(_)) => true,
            (AttributeType::Int64, Value::Number(n)) => n.is_i64(),
            (AttributeType::Bool, Value::Bool(_)) => true,
            (AttributeType::Object { .. }, Value::Object(_)) => true,
            (AttributeType::List { .. }, Value::Array(_)) => true,
            _ => false,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.kind {
            AttributeType::String => "string",
            AttributeType::Int64 => "number",
            AttributeType::Bool => "bool",
            AttributeType::Object { .. } => "object",
            AttributeType::List { .. } => "list",
        }
    }
}

/// A repeated nested block, e.g. `column { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Block {
    pub fn list(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub blocks: BTreeMap<String, Block>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
            blocks: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    pub fn with_block(mut self, name: &str, block: Block) -> Self {
        self.blocks.insert(name.to_string(), block);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    /// Check a configuration object against the schema.
    ///
    /// Reports missing required attributes, values for read-only attributes,
    /// type mismatches, unsupported arguments, and validator failures, each
    /// scoped to its attribute path.
    pub fn validate_config(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        let Some(object) = config.as_object() else {
            diags.push(Diagnostic::error(
                "Invalid Configuration",
                "configuration must be a JSON object",
            ));
            return diags;
        };

        validate_attributes(&self.attributes, object, "", &mut diags);

        for (name, block) in &self.blocks {
            match object.get(name) {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => {
                    for (i, item) in items.iter().enumerate() {
                        let path = format!("{}[{}]", name, i);
                        match item.as_object() {
                            Some(obj) => validate_attributes(
                                &block.attributes,
                                obj,
                                &format!("{}.", path),
                                &mut diags,
                            ),
                            None => diags.push(Diagnostic::attribute_error(
                                path,
                                "Incorrect attribute value type",
                                "block element must be an object",
                            )),
                        }
                    }
                }
                Some(_) => diags.push(Diagnostic::attribute_error(
                    name.clone(),
                    "Incorrect attribute value type",
                    "block must be a list of objects",
                )),
            }
        }

        for key in object.keys() {
            if !self.attributes.contains_key(key) && !self.blocks.contains_key(key) {
                diags.push(Diagnostic::attribute_error(
                    key.clone(),
                    "Unsupported argument",
                    format!("An argument named {:?} is not expected here.", key),
                ));
            }
        }

        diags
    }
}

fn validate_attributes(
    attributes: &BTreeMap<String, Attribute>,
    object: &serde_json::Map<String, Value>,
    prefix: &str,
    diags: &mut Diagnostics,
) {
    for (name, attr) in attributes {
        let path = format!("{}{}", prefix, name);
        let value = object.get(name).unwrap_or(&Value::Null);

        if value.is_null() {
            if attr.required {
                diags.push(Diagnostic::attribute_error(
                    path,
                    "Missing required argument",
                    format!("The argument {:?} is required, but no definition was found.", name),
                ));
            }
            continue;
        }

        if !attr.is_configurable() {
            diags.push(Diagnostic::attribute_error(
                path,
                "Invalid Configuration for Read-Only Attribute",
                format!("Cannot set value for attribute {:?}, it is computed.", name),
            ));
            continue;
        }

        if !attr.type_matches(value) {
            diags.push(Diagnostic::attribute_error(
                path,
                "Incorrect attribute value type",
                format!("a {} is required", attr.type_name()),
            ));
            continue;
        }

        if let AttributeType::Object { attributes: nested } = &attr.kind
            && let Some(obj) = value.as_object()
        {
            validate_attributes(nested, obj, &format!("{}.", path), diags);
        }

        for validator in &attr.validators {
            if let Some(diag) = validator.validate(&path, value.as_str()) {
                diags.push(diag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Schema {
        Schema::new("sample")
            .with_attribute("id", Attribute::computed_string().use_state_for_unknown())
            .with_attribute("name", Attribute::required_string())
            .with_attribute("url", Attribute::optional_string().validator(Validator::Url))
            .with_attribute("retention", Attribute::optional_computed_int64())
            .with_block(
                "column",
                Block::list("columns")
                    .with_attribute("name", Attribute::required_string())
                    .with_attribute("codec", Attribute::optional_string().default(json!(""))),
            )
    }

    #[test]
    fn test_valid_config() {
        let diags = sample().validate_config(&json!({
            "name": "orders",
            "url": "https://x.example",
            "column": [{"name": "id"}]
        }));
        assert!(diags.is_empty(), "{}", diags);
    }

    #[test]
    fn test_missing_required() {
        let diags = sample().validate_config(&json!({}));
        assert!(diags.for_attribute("name").is_some());
    }

    #[test]
    fn test_computed_only_rejected_in_config() {
        let diags = sample().validate_config(&json!({"name": "a", "id": "x"}));
        assert_eq!(
            diags.for_attribute("id").unwrap().summary,
            "Invalid Configuration for Read-Only Attribute"
        );
    }

    #[test]
    fn test_type_mismatch_and_validator() {
        let diags = sample().validate_config(&json!({
            "name": "a",
            "retention": "big",
            "url": "nope"
        }));
        assert!(diags.for_attribute("retention").is_some());
        assert_eq!(diags.for_attribute("url").unwrap().summary, "invalid URL");
    }

    #[test]
    fn test_block_paths() {
        let diags = sample().validate_config(&json!({
            "name": "a",
            "column": [{"name": "id"}, {"codec": "LZ4"}]
        }));
        assert!(diags.for_attribute("column[1].name").is_some());
        assert!(diags.for_attribute("column[0].name").is_none());
    }

    #[test]
    fn test_unsupported_argument() {
        let diags = sample().validate_config(&json!({"name": "a", "colour": "red"}));
        assert_eq!(diags.for_attribute("colour").unwrap().summary, "Unsupported argument");
    }

    #[test]
    fn test_default_marks_computed() {
        let attr = Attribute::optional_bool().default(json!(false));
        assert!(attr.computed);
        assert!(attr.optional);
    }

    #[test]
    fn test_schema_serializes_kind_inline() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["attributes"]["name"]["type"], "string");
        assert_eq!(value["attributes"]["id"]["plan_modifiers"][0], "use_state_for_unknown");
        assert_eq!(value["blocks"]["column"]["attributes"]["codec"]["default"], "");
    }
}
