//! Command catalog
//!
//! One [`OperationDescriptor`] per supported operation: its wire command,
//! how its arguments are encoded and how its reply is decoded. The table
//! is a `const` slice; name lookups go through maps built once on first
//! use and never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// How one argument is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArgRule {
    /// Any JSON value, sent as JSON text
    Json,
    /// A JSON string, sent quoted
    JsonString,
    /// A boolean, string or number, sent as JSON text
    JsonScalar,
    /// An integer, sent as a numeral
    Integer,
    /// Any number, sent as a numeral
    Number,
    /// A document key, sent verbatim
    Key,
}

/// Argument count beyond the fixed arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arity {
    /// Exactly the fixed arguments
    Fixed,
    /// Fixed arguments followed by `min` or more extras, each encoded with `rule`
    Variadic {
        /// Encoding of every extra argument
        rule: ArgRule,
        /// Minimum number of extras
        min: usize,
    },
}

/// Where the path goes in the argument list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PathPosition {
    /// `key path args...`
    AfterKey,
    /// `key args... path`
    Last,
}

/// How the reply is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultRule {
    /// `OK` status, anything else is a write error
    Ack,
    /// JSON text, or nil
    Json,
    /// Array of JSON texts or nils
    JsonList,
    /// Integer count, true when positive
    Flag,
    /// Integer
    Integer,
    /// Bare numeral
    Number,
    /// Array of key names
    Keys,
    /// Type tag status
    TypeTag,
    /// Reply passed through as-is
    Raw,
}

/// Static description of one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    /// Operation name, e.g. `arrappend`
    pub name: &'static str,
    /// Wire command name, e.g. `JSON.ARRAPPEND`
    pub wire: &'static str,
    /// Subcommand sent before the key, e.g. `MEMORY` for `JSON.DEBUG`
    pub subcommand: Option<&'static str>,
    /// Encoding of the fixed arguments after key and path
    pub args: &'static [ArgRule],
    /// Extra argument rule
    pub arity: Arity,
    /// Path placement
    pub path: PathPosition,
    /// Reply decoding
    pub result: ResultRule,
}

impl OperationDescriptor {
    /// True when the operation takes extra arguments.
    pub fn is_variadic(&self) -> bool {
        matches!(self.arity, Arity::Variadic { .. })
    }

    /// Smallest number of parameters the builder accepts.
    pub fn min_params(&self) -> usize {
        match self.arity {
            Arity::Fixed => self.args.len(),
            Arity::Variadic { min, .. } => self.args.len() + min,
        }
    }
}

const fn fixed(
    name: &'static str,
    wire: &'static str,
    args: &'static [ArgRule],
    result: ResultRule,
) -> OperationDescriptor {
    OperationDescriptor {
        name,
        wire,
        subcommand: None,
        args,
        arity: Arity::Fixed,
        path: PathPosition::AfterKey,
        result,
    }
}

/// Every supported operation
pub const OPERATIONS: &[OperationDescriptor] = &[
    fixed("set", "JSON.SET", &[ArgRule::Json], ResultRule::Ack),
    fixed("get", "JSON.GET", &[], ResultRule::Json),
    OperationDescriptor {
        name: "mget",
        wire: "JSON.MGET",
        subcommand: None,
        args: &[],
        arity: Arity::Variadic {
            rule: ArgRule::Key,
            min: 1,
        },
        path: PathPosition::Last,
        result: ResultRule::JsonList,
    },
    fixed("del", "JSON.DEL", &[], ResultRule::Flag),
    fixed("forget", "JSON.FORGET", &[], ResultRule::Flag),
    fixed("objkeys", "JSON.OBJKEYS", &[], ResultRule::Keys),
    fixed("objlen", "JSON.OBJLEN", &[], ResultRule::Integer),
    fixed("type", "JSON.TYPE", &[], ResultRule::TypeTag),
    fixed("numincrby", "JSON.NUMINCRBY", &[ArgRule::Number], ResultRule::Number),
    fixed("nummultby", "JSON.NUMMULTBY", &[ArgRule::Number], ResultRule::Number),
    fixed("strappend", "JSON.STRAPPEND", &[ArgRule::JsonString], ResultRule::Integer),
    fixed("strlen", "JSON.STRLEN", &[], ResultRule::Integer),
    OperationDescriptor {
        name: "arrappend",
        wire: "JSON.ARRAPPEND",
        subcommand: None,
        args: &[],
        arity: Arity::Variadic {
            rule: ArgRule::Json,
            min: 1,
        },
        path: PathPosition::AfterKey,
        result: ResultRule::Integer,
    },
    fixed("arrindex", "JSON.ARRINDEX", &[ArgRule::JsonScalar], ResultRule::Integer),
    OperationDescriptor {
        name: "arrinsert",
        wire: "JSON.ARRINSERT",
        subcommand: None,
        args: &[ArgRule::Integer],
        arity: Arity::Variadic {
            rule: ArgRule::Json,
            min: 1,
        },
        path: PathPosition::AfterKey,
        result: ResultRule::Integer,
    },
    fixed("arrlen", "JSON.ARRLEN", &[], ResultRule::Integer),
    fixed("arrpop", "JSON.ARRPOP", &[ArgRule::Integer], ResultRule::Json),
    fixed(
        "arrtrim",
        "JSON.ARRTRIM",
        &[ArgRule::Integer, ArgRule::Integer],
        ResultRule::Integer,
    ),
    fixed("resp", "JSON.RESP", &[], ResultRule::Raw),
    OperationDescriptor {
        name: "debug",
        wire: "JSON.DEBUG",
        subcommand: Some("MEMORY"),
        args: &[],
        arity: Arity::Fixed,
        path: PathPosition::AfterKey,
        result: ResultRule::Integer,
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static OperationDescriptor>> =
    Lazy::new(|| OPERATIONS.iter().map(|d| (d.name, d)).collect());

static BY_WIRE: Lazy<HashMap<&'static str, &'static OperationDescriptor>> =
    Lazy::new(|| OPERATIONS.iter().map(|d| (d.wire, d)).collect());

/// Look up an operation by name (`arrappend`).
pub fn lookup(name: &str) -> Option<&'static OperationDescriptor> {
    BY_NAME.get(name).copied()
}

/// Look up an operation by wire command name, ignoring case (`json.arrappend`).
pub fn lookup_wire(wire: &str) -> Option<&'static OperationDescriptor> {
    BY_WIRE.get(wire.to_ascii_uppercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_wires_are_unique() {
        let names: HashSet<_> = OPERATIONS.iter().map(|d| d.name).collect();
        let wires: HashSet<_> = OPERATIONS.iter().map(|d| d.wire).collect();
        assert_eq!(names.len(), OPERATIONS.len());
        assert_eq!(wires.len(), OPERATIONS.len());
    }

    #[test]
    fn test_wire_names_are_json_commands() {
        for d in OPERATIONS {
            assert!(d.wire.starts_with("JSON."), "{}", d.wire);
            assert_eq!(d.wire[5..].to_ascii_lowercase(), d.name);
        }
    }

    #[test]
    fn test_lookup() {
        let d = lookup("arrinsert").unwrap();
        assert_eq!(d.wire, "JSON.ARRINSERT");
        assert_eq!(d.min_params(), 2);
        assert!(d.is_variadic());
        assert!(lookup("JSON.ARRINSERT").is_none());
        assert!(lookup("resp").is_some());
    }

    #[test]
    fn test_lookup_wire_ignores_case() {
        assert_eq!(lookup_wire("json.set").map(|d| d.name), Some("set"));
        assert_eq!(lookup_wire("JSON.MGET").map(|d| d.name), Some("mget"));
        assert!(lookup_wire("GET").is_none());
    }

    #[test]
    fn test_debug_sends_memory_subcommand() {
        let d = lookup_wire("json.debug").unwrap();
        assert_eq!(d.name, "debug");
        assert_eq!(d.subcommand, Some("MEMORY"));
        assert_eq!(d.result, ResultRule::Integer);
        assert!(OPERATIONS
            .iter()
            .filter(|d| d.name != "debug")
            .all(|d| d.subcommand.is_none()));
    }

    #[test]
    fn test_mget_takes_path_last() {
        let d = lookup("mget").unwrap();
        assert_eq!(d.path, PathPosition::Last);
        assert_eq!(d.min_params(), 1);
    }
}
