//! Plan computation.
//!
//! Given a resource schema, its prior state, and the user's configuration,
//! [`plan_resource_change`] decides what apply will do and what the state
//! will look like afterwards:
//!
//! - schema defaults fill attributes the configuration leaves null
//! - computed attributes absent from config keep their prior value when
//!   nothing changes or when marked `UseStateForUnknown`, and are reported
//!   unknown otherwise
//! - any `RequiresReplace` attribute whose config value differs from prior
//!   state turns the plan into a replace
//!
//! Unknown attributes are null in `planned_state` and listed by path in
//! `unknown`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::{Attribute, PlanModifier, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanAction {
    Create,
    Update,
    Replace,
    NoOp,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedChange {
    pub action: PlanAction,
    pub planned_state: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires_replace: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<String>,
}

/// Compute the planned change for one resource instance.
///
/// `prior` is `None` for a resource that does not exist yet; `config` is
/// `None` for a resource removed from configuration.
pub fn plan_resource_change(
    schema: &Schema,
    prior: Option<&Value>,
    config: Option<&Value>,
) -> PlannedChange {
    let Some(config) = config else {
        return PlannedChange {
            action: if prior.is_some() {
                PlanAction::Delete
            } else {
                PlanAction::NoOp
            },
            planned_state: Value::Null,
            requires_replace: Vec::new(),
            unknown: Vec::new(),
        };
    };

    let config = config.as_object().cloned().unwrap_or_default();
    let mut proposed = with_defaults(schema, &config);

    let Some(prior) = prior.and_then(Value::as_object) else {
        let unknown = mark_unknown(&schema.attributes, &config, &mut proposed, |_| true);
        return PlannedChange {
            action: PlanAction::Create,
            planned_state: Value::Object(proposed),
            requires_replace: Vec::new(),
            unknown,
        };
    };

    // Computed values the user did not configure carry over from state.
    for (name, attr) in &schema.attributes {
        if attr.computed && is_null(config.get(name)) {
            let prior_value = prior.get(name).cloned().unwrap_or(Value::Null);
            proposed.insert(name.clone(), prior_value);
        }
    }

    if same_state(schema, &proposed, prior) {
        return PlannedChange {
            action: PlanAction::NoOp,
            planned_state: Value::Object(prior.clone()),
            requires_replace: Vec::new(),
            unknown: Vec::new(),
        };
    }

    let requires_replace = replace_paths(schema, &proposed, prior);
    let (action, unknown) = if requires_replace.is_empty() {
        let unknown = mark_unknown(&schema.attributes, &config, &mut proposed, |attr| {
            !attr.has_modifier(PlanModifier::UseStateForUnknown)
        });
        (PlanAction::Update, unknown)
    } else {
        let unknown = mark_unknown(&schema.attributes, &config, &mut proposed, |_| true);
        (PlanAction::Replace, unknown)
    };

    PlannedChange {
        action,
        planned_state: Value::Object(proposed),
        requires_replace,
        unknown,
    }
}

fn is_null(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_null)
}

fn apply_defaults(attributes: &BTreeMap<String, Attribute>, object: &mut Map<String, Value>) {
    for (name, attr) in attributes {
        if let Some(default) = &attr.default
            && is_null(object.get(name))
        {
            object.insert(name.clone(), default.clone());
        }
    }
}

fn with_defaults(schema: &Schema, config: &Map<String, Value>) -> Map<String, Value> {
    let mut proposed = config.clone();
    apply_defaults(&schema.attributes, &mut proposed);

    for (name, block) in &schema.blocks {
        if let Some(Value::Array(items)) = proposed.get_mut(name) {
            for item in items.iter_mut() {
                if let Value::Object(obj) = item {
                    apply_defaults(&block.attributes, obj);
                }
            }
        }
    }
    proposed
}

/// Null out computed attributes absent from config that `pred` selects.
fn mark_unknown(
    attributes: &BTreeMap<String, Attribute>,
    config: &Map<String, Value>,
    proposed: &mut Map<String, Value>,
    pred: impl Fn(&Attribute) -> bool,
) -> Vec<String> {
    let mut unknown = Vec::new();
    for (name, attr) in attributes {
        if attr.computed && attr.default.is_none() && is_null(config.get(name)) && pred(attr) {
            proposed.insert(name.clone(), Value::Null);
            unknown.push(name.clone());
        }
    }
    unknown
}

fn field<'a>(object: &'a Map<String, Value>, name: &str) -> &'a Value {
    object.get(name).unwrap_or(&Value::Null)
}

fn block_items<'a>(object: &'a Map<String, Value>, name: &str) -> &'a [Value] {
    object
        .get(name)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn same_state(schema: &Schema, a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    let attrs_equal = schema
        .attributes
        .keys()
        .all(|name| field(a, name) == field(b, name));

    attrs_equal
        && schema.blocks.iter().all(|(name, block)| {
            let (xs, ys) = (block_items(a, name), block_items(b, name));
            xs.len() == ys.len()
                && xs.iter().zip(ys).all(|(x, y)| {
                    let empty = Map::new();
                    let x = x.as_object().unwrap_or(&empty);
                    let y = y.as_object().unwrap_or(&empty);
                    block.attributes.keys().all(|k| field(x, k) == field(y, k))
                })
        })
}

fn replace_paths(
    schema: &Schema,
    proposed: &Map<String, Value>,
    prior: &Map<String, Value>,
) -> Vec<String> {
    let mut paths = Vec::new();

    for (name, attr) in &schema.attributes {
        if attr.has_modifier(PlanModifier::RequiresReplace)
            && field(proposed, name) != field(prior, name)
        {
            paths.push(name.clone());
        }
    }

    for (name, block) in &schema.blocks {
        let (xs, ys) = (block_items(proposed, name), block_items(prior, name));
        for i in 0..xs.len().max(ys.len()) {
            let empty = Map::new();
            let x = xs.get(i).and_then(Value::as_object).unwrap_or(&empty);
            let y = ys.get(i).and_then(Value::as_object).unwrap_or(&empty);
            for (attr_name, attr) in &block.attributes {
                if attr.has_modifier(PlanModifier::RequiresReplace)
                    && field(x, attr_name) != field(y, attr_name)
                {
                    paths.push(format!("{}[{}].{}", name, i, attr_name));
                }
            }
        }
    }

    paths
}
