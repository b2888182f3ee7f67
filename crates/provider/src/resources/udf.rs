//! Pieces shared by the two function resources.
//!
//! Remote and JavaScript functions are stored in the same `/udfs`
//! collection and distinguished by `type`. Each resource checks the kind on
//! read so that a function of the other kind is never silently adopted.

use serde::{Deserialize, Serialize};
use timeplus_client::{Udf, UdfArgument, UdfType};

use crate::error::ProviderError;
use crate::schema::{Attribute, Block};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentModel {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub arg_type: String,
}

/// HTTP header a remote function's webhook uses to authenticate calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthHeaderModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

pub(crate) fn arg_block(kind: &str) -> Block {
    Block::list(format!(
        "Describe an argument of the {} function, argument order matters",
        kind
    ))
    .with_attribute(
        "name",
        Attribute::required_string().description("The argument name"),
    )
    .with_attribute(
        "type",
        Attribute::required_string().description("The argument type"),
    )
}

pub(crate) fn args_to_wire(args: &[ArgumentModel]) -> Vec<UdfArgument> {
    args.iter()
        .map(|a| UdfArgument {
            name: a.name.clone(),
            arg_type: a.arg_type.clone(),
        })
        .collect()
}

pub(crate) fn args_from_wire(args: Vec<UdfArgument>) -> Vec<ArgumentModel> {
    args.into_iter()
        .map(|a| ArgumentModel {
            name: a.name,
            arg_type: a.arg_type,
        })
        .collect()
}

/// Fail unless the server's function is of the `expected` kind.
pub(crate) fn ensure_kind(
    udf: &Udf,
    expected: UdfType,
    entity: &'static str,
    name: &str,
) -> Result<(), ProviderError> {
    if udf.udf_type == expected {
        return Ok(());
    }
    Err(ProviderError::TypeMismatch {
        entity,
        message: format!("Function with name {} is not a {} function", name, expected),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_kind_message() {
        let udf = Udf {
            name: "foo".to_string(),
            udf_type: UdfType::Javascript,
            ..Udf::default()
        };

        let err = ensure_kind(&udf, UdfType::Remote, "Remote Function", "foo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error Reading Remote Function: Function with name foo is not a remote function"
        );
        assert!(ensure_kind(&udf, UdfType::Javascript, "Javascript Function", "foo").is_ok());
    }

    #[test]
    fn test_args_keep_order() {
        let args = vec![
            ArgumentModel {
                name: "b".to_string(),
                arg_type: "string".to_string(),
            },
            ArgumentModel {
                name: "a".to_string(),
                arg_type: "int32".to_string(),
            },
        ];
        assert_eq!(args_from_wire(args_to_wire(&args)), args);
    }
}
