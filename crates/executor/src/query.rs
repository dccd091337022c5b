//! Composite query compiler
//!
//! A composite query is a nested JSON object describing field-level updates
//! to one document. Compiling it walks the object depth-first in insertion
//! order and emits one [`Command`] per leaf:
//!
//! | Node | Emits |
//! |------|-------|
//! | scalar, `null` or array | `Set` at the field path |
//! | `{"$set": V}` | `Set` of `V`, verbatim, at the field path |
//! | `{"$del": true}` | `Del` at the field path |
//! | any other object | nothing itself; its fields are walked |
//!
//! Field paths extend the parent with `<name>.`, starting from the root
//! `.`, so `{"a": {"b": 1}}` sets `.a.b.`.

use rejson_core::{JsonPath, JsonValue};
use serde_json::Value;

use crate::{Command, Error, Result};

/// Operator key assigning a value verbatim
pub const SET_OPERATOR: &str = "$set";

/// Operator key deleting a field
pub const DEL_OPERATOR: &str = "$del";

/// A field operator
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    /// Assign the value as is, even an object
    Set(JsonValue),
    /// Delete the field
    Del,
}

/// A classified query node
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    /// Leaf value assigned with `set`
    Scalar(JsonValue),
    /// Operator object
    Operator(Operator),
    /// Plain object, walked field by field
    Object(Vec<(String, QueryNode)>),
}

impl QueryNode {
    fn classify(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let operators = map
                    .keys()
                    .filter(|k| k.as_str() == SET_OPERATOR || k.as_str() == DEL_OPERATOR)
                    .count();
                if operators == 0 {
                    return map
                        .into_iter()
                        .map(|(name, child)| Ok((name, QueryNode::classify(child)?)))
                        .collect::<Result<Vec<_>>>()
                        .map(QueryNode::Object);
                }
                if map.len() != 1 {
                    return Err(Error::InvalidQuery {
                        reason: "an operator must be the only key of its object".into(),
                    });
                }
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((op, value)) if op == SET_OPERATOR => {
                        Ok(QueryNode::Operator(Operator::Set(JsonValue::from(value))))
                    }
                    Some((_, Value::Bool(true))) => Ok(QueryNode::Operator(Operator::Del)),
                    Some((_, other)) => Err(Error::InvalidQuery {
                        reason: format!("{} expects true, got {}", DEL_OPERATOR, other),
                    }),
                    None => Err(Error::Internal {
                        reason: "operator object has no entries".into(),
                    }),
                }
            }
            other => Ok(QueryNode::Scalar(JsonValue::from(other))),
        }
    }

    fn compile_into(&self, key: &str, path: &JsonPath, plan: &mut Vec<Command>) {
        match self {
            QueryNode::Scalar(value) | QueryNode::Operator(Operator::Set(value)) => {
                plan.push(Command::Set {
                    key: key.to_string(),
                    path: path.clone(),
                    value: value.clone(),
                })
            }
            QueryNode::Operator(Operator::Del) => plan.push(Command::Del {
                key: key.to_string(),
                path: path.clone(),
            }),
            QueryNode::Object(fields) => {
                for (name, child) in fields {
                    child.compile_into(key, &path.child(name), plan);
                }
            }
        }
    }
}

/// A parsed composite query
///
/// # Example
///
/// ```
/// use rejson_executor::{Command, CompositeQuery};
/// use serde_json::json;
///
/// let query = CompositeQuery::parse(json!({"name": "Alice", "address": {"zip": 2000}}).into()).unwrap();
/// let plan = query.compile("user:1");
/// assert_eq!(plan.len(), 2);
/// assert!(matches!(&plan[1], Command::Set { path, .. } if path.as_str() == ".address.zip."));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeQuery {
    branches: Vec<(String, QueryNode)>,
}

impl CompositeQuery {
    /// Classify a query object.
    ///
    /// # Errors
    ///
    /// `Error::InvalidQuery` if the value is not an object, or an operator
    /// object is malformed.
    pub fn parse(query: JsonValue) -> Result<Self> {
        match query.into_inner() {
            value @ Value::Object(_) => match QueryNode::classify(value)? {
                QueryNode::Object(branches) => Ok(Self { branches }),
                QueryNode::Operator(_) => Err(Error::InvalidQuery {
                    reason: "operators are not allowed at the top level".into(),
                }),
                QueryNode::Scalar(_) => Err(Error::Internal {
                    reason: "object classified as scalar".into(),
                }),
            },
            other => Err(Error::InvalidQuery {
                reason: format!("expected an object, got {}", rejson_core::JsonType::of(&other)),
            }),
        }
    }

    /// Top-level fields in insertion order.
    pub fn branches(&self) -> &[(String, QueryNode)] {
        &self.branches
    }

    /// Compile to the ordered command plan for `key`.
    pub fn compile(&self, key: &str) -> Vec<Command> {
        let mut plan = Vec::new();
        let root = JsonPath::root();
        for (name, node) in &self.branches {
            node.compile_into(key, &root.child(name), &mut plan);
        }
        plan
    }
}
