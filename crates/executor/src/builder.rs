//! Path-addressed command builder
//!
//! `build(key, path, operation, params)` turns a logical operation into
//! the wire command the store understands. It is a pure function over the
//! static catalog: no I/O and no shared mutable state, so it can be called
//! from any thread.
//!
//! Argument order is the subcommand (only `debug` has one), `key`, then
//! the path (for most operations), then the fixed arguments, then the
//! extras of variadic operations, each encoded independently and kept in
//! caller order. `mget` puts the path last.

use rejson_core::{JsonPath, JsonValue};
use rejson_wire::{encode_json, WireCommand};

use crate::catalog::{self, ArgRule, Arity, OperationDescriptor, PathPosition};
use crate::{Error, Result};

/// One operation parameter, before encoding
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// A JSON value
    Json(JsonValue),
    /// A document key
    Key(String),
}

impl Param {
    /// Document key parameter.
    pub fn key(key: impl Into<String>) -> Self {
        Param::Key(key.into())
    }
}

impl From<JsonValue> for Param {
    fn from(v: JsonValue) -> Self {
        Param::Json(v)
    }
}

impl From<serde_json::Value> for Param {
    fn from(v: serde_json::Value) -> Self {
        Param::Json(JsonValue::from(v))
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Json(JsonValue::from(v))
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Json(JsonValue::from(v))
    }
}

impl From<serde_json::Number> for Param {
    fn from(v: serde_json::Number) -> Self {
        Param::Json(JsonValue::from(v))
    }
}

impl From<&str> for Param {
    /// A string literal is a JSON string value, not a key.
    fn from(v: &str) -> Self {
        Param::Json(JsonValue::from(v))
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Json(JsonValue::from(v))
    }
}

/// A wire command together with the descriptor that produced it
///
/// The descriptor travels with the command so the reply can be decoded
/// with the right rule, including inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltCommand {
    /// Catalog entry of the operation
    pub descriptor: &'static OperationDescriptor,
    /// Encoded command
    pub wire: WireCommand,
}

/// Build the wire command for `operation` on `key` at `path`.
///
/// # Errors
///
/// - `Error::UnknownOperation` if `operation` is not in the catalog
/// - `Error::InvalidArgument` if the parameter count or kinds do not fit
///
/// # Example
///
/// ```
/// use rejson_core::JsonPath;
/// use rejson_executor::{build, Param};
///
/// let built = build("doc", &JsonPath::new(".b"), "arrappend", vec![4i64.into(), 5i64.into()]).unwrap();
/// assert_eq!(built.wire.name, "JSON.ARRAPPEND");
/// assert_eq!(built.wire.args, vec!["doc", ".b", "4", "5"]);
/// ```
pub fn build(key: &str, path: &JsonPath, operation: &str, params: Vec<Param>) -> Result<BuiltCommand> {
    let descriptor = catalog::lookup(operation).ok_or_else(|| Error::UnknownOperation {
        name: operation.to_string(),
    })?;
    build_with(descriptor, key, path, params)
}

/// Build against an already resolved descriptor.
pub fn build_with(
    descriptor: &'static OperationDescriptor,
    key: &str,
    path: &JsonPath,
    params: Vec<Param>,
) -> Result<BuiltCommand> {
    check_arity(descriptor, params.len())?;

    let mut wire = WireCommand::new(descriptor.wire);
    if let Some(subcommand) = descriptor.subcommand {
        wire.push_arg(subcommand);
    }
    wire.push_arg(key);
    if descriptor.path == PathPosition::AfterKey {
        wire.push_arg(path.as_str());
    }

    let mut params = params.into_iter();
    for rule in descriptor.args {
        // arity was checked, so every fixed rule has a parameter
        let param = params.next().ok_or_else(|| arity_error(descriptor, 0))?;
        wire.push_arg(encode_param(descriptor, *rule, param)?);
    }
    if let Arity::Variadic { rule, .. } = descriptor.arity {
        for param in params {
            wire.push_arg(encode_param(descriptor, rule, param)?);
        }
    }

    if descriptor.path == PathPosition::Last {
        wire.push_arg(path.as_str());
    }

    Ok(BuiltCommand { descriptor, wire })
}

fn check_arity(descriptor: &OperationDescriptor, count: usize) -> Result<()> {
    let fits = match descriptor.arity {
        Arity::Fixed => count == descriptor.args.len(),
        Arity::Variadic { .. } => count >= descriptor.min_params(),
    };
    if fits {
        Ok(())
    } else {
        Err(arity_error(descriptor, count))
    }
}

fn arity_error(descriptor: &OperationDescriptor, count: usize) -> Error {
    let expected = match descriptor.arity {
        Arity::Fixed => format!("{}", descriptor.args.len()),
        Arity::Variadic { .. } => format!("at least {}", descriptor.min_params()),
    };
    Error::InvalidArgument {
        operation: descriptor.name.to_string(),
        reason: format!("expected {} parameters, got {}", expected, count),
    }
}

fn invalid(descriptor: &OperationDescriptor, reason: impl Into<String>) -> Error {
    Error::InvalidArgument {
        operation: descriptor.name.to_string(),
        reason: reason.into(),
    }
}

fn encode_param(descriptor: &OperationDescriptor, rule: ArgRule, param: Param) -> Result<String> {
    match (rule, param) {
        (ArgRule::Key, Param::Key(key)) => Ok(key),
        (ArgRule::Key, Param::Json(v)) => match v.into_inner() {
            serde_json::Value::String(key) => Ok(key),
            other => Err(invalid(
                descriptor,
                format!("expected a document key, got {}", other),
            )),
        },
        (_, Param::Key(key)) => Err(invalid(
            descriptor,
            format!("document key '{}' given where a value was expected", key),
        )),
        (ArgRule::Json, Param::Json(v)) => Ok(encode_json(&v)),
        (ArgRule::JsonString, Param::Json(v)) if v.is_string() => Ok(encode_json(&v)),
        (ArgRule::JsonString, Param::Json(v)) => Err(invalid(
            descriptor,
            format!("expected a string, got {}", v.json_type()),
        )),
        (ArgRule::JsonScalar, Param::Json(v)) if v.is_scalar() => Ok(encode_json(&v)),
        (ArgRule::JsonScalar, Param::Json(v)) => Err(invalid(
            descriptor,
            format!("expected a scalar, got {}", v.json_type()),
        )),
        (ArgRule::Integer, Param::Json(v)) => v
            .as_i64()
            .map(|i| i.to_string())
            .ok_or_else(|| invalid(descriptor, format!("expected an integer, got {}", v))),
        (ArgRule::Number, Param::Json(v)) => match v.as_inner() {
            serde_json::Value::Number(n) => Ok(n.to_string()),
            _ => Err(invalid(
                descriptor,
                format!("expected a number, got {}", v.json_type()),
            )),
        },
    }
}
