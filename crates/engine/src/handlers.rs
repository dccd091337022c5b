//! `JSON.*` command handlers
//!
//! Each handler takes the document map and the command's arguments and
//! returns the store's reply. Reads on a missing key or path answer nil;
//! mutations on a missing key or path answer an error reply.

use std::collections::HashMap;

use rejson_core::{JsonPath, JsonType, JsonValue, PathSegment};
use rejson_wire::{decode_json, decode_number, Reply, WireCommand};
use serde_json::{Number, Value};
use tracing::{trace, warn};

use crate::paths::{self, normalize_index, type_name};
use crate::StoreError;

pub(crate) type Documents = HashMap<String, JsonValue>;

type HandlerResult = Result<Reply, StoreError>;

/// Execute one command against the document map.
///
/// Store failures become `Reply::Error`; this never fails as a whole.
pub(crate) fn dispatch(docs: &mut Documents, command: &WireCommand) -> Reply {
    trace!(target: "rejson::engine", command = command.name, args = command.args.len(), "Dispatch");

    let name = command.name.to_ascii_uppercase();
    let args = Args {
        name: command.name,
        values: &command.args,
    };
    let result = match name.as_str() {
        "JSON.SET" => json_set(docs, args),
        "JSON.GET" => json_get(docs, args),
        "JSON.MGET" => json_mget(docs, args),
        "JSON.DEL" | "JSON.FORGET" => json_del(docs, args),
        "JSON.TYPE" => json_type(docs, args),
        "JSON.NUMINCRBY" => json_num_op(docs, args, NumOp::Add),
        "JSON.NUMMULTBY" => json_num_op(docs, args, NumOp::Mul),
        "JSON.STRAPPEND" => json_strappend(docs, args),
        "JSON.STRLEN" => json_strlen(docs, args),
        "JSON.ARRAPPEND" => json_arrappend(docs, args),
        "JSON.ARRINDEX" => json_arrindex(docs, args),
        "JSON.ARRINSERT" => json_arrinsert(docs, args),
        "JSON.ARRLEN" => json_arrlen(docs, args),
        "JSON.ARRPOP" => json_arrpop(docs, args),
        "JSON.ARRTRIM" => json_arrtrim(docs, args),
        "JSON.OBJKEYS" => json_objkeys(docs, args),
        "JSON.OBJLEN" => json_objlen(docs, args),
        "JSON.RESP" => json_resp(docs, args),
        "JSON.DEBUG" => json_debug(docs, args),
        _ => Err(StoreError::UnknownCommand(command.name.to_string())),
    };

    result.unwrap_or_else(|e| {
        warn!(target: "rejson::engine", command = command.name, error = %e, "Command failed");
        Reply::Error(e.to_string())
    })
}

// =============================================================================
// Argument access
// =============================================================================

#[derive(Clone, Copy)]
struct Args<'a> {
    name: &'a str,
    values: &'a [String],
}

impl<'a> Args<'a> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn arity(&self, min: usize, max: usize) -> Result<(), StoreError> {
        if (min..=max).contains(&self.len()) {
            Ok(())
        } else {
            Err(StoreError::WrongArity(self.name.to_string()))
        }
    }

    fn text(&self, index: usize) -> &'a str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    /// Path argument, defaulting to the root when omitted
    fn path(&self, index: usize) -> &'a str {
        self.values.get(index).map(String::as_str).unwrap_or(".")
    }

    fn json(&self, index: usize) -> Result<Value, StoreError> {
        decode_json(self.text(index))
            .map(JsonValue::into_inner)
            .map_err(|e| StoreError::InvalidJson(e.to_string()))
    }

    fn integer(&self, index: usize) -> Result<i64, StoreError> {
        self.text(index)
            .trim()
            .parse::<i64>()
            .map_err(|_| StoreError::NotAnInteger)
    }

    fn number(&self, index: usize) -> Result<Number, StoreError> {
        decode_number(self.text(index)).map_err(|_| StoreError::NotANumber)
    }
}

fn segments(path: &str) -> Result<Vec<PathSegment>, StoreError> {
    Ok(JsonPath::new(path).segments()?)
}

/// Value at `path` of `key`, `None` if either is missing
fn lookup<'d>(docs: &'d Documents, key: &str, path: &str) -> Result<Option<&'d Value>, StoreError> {
    let segments = segments(path)?;
    Ok(docs
        .get(key)
        .and_then(|doc| paths::get(doc.as_inner(), &segments)))
}

/// Mutable value at `path` of `key`; both must exist
fn lookup_mut<'d>(docs: &'d mut Documents, key: &str, path: &str) -> Result<&'d mut Value, StoreError> {
    let segments = segments(path)?;
    let doc = docs.get_mut(key).ok_or(StoreError::NoSuchKey)?;
    paths::get_mut(doc.as_inner_mut(), &segments).ok_or_else(|| StoreError::NoSuchPath(path.to_string()))
}

fn wrong_type(expected: &'static str, found: &Value) -> StoreError {
    StoreError::WrongType {
        expected,
        found: type_name(found),
    }
}

fn length(len: usize) -> Reply {
    Reply::Integer(len as i64)
}

// =============================================================================
// Document commands
// =============================================================================

fn json_set(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(3, 3)?;
    let key = args.text(0);
    let segments = segments(args.text(1))?;
    let value = args.json(2)?;

    match docs.get_mut(key) {
        None if segments.is_empty() => {
            docs.insert(key.to_string(), JsonValue::from_value(value));
        }
        None => return Err(StoreError::NewObjectNotAtRoot),
        Some(doc) => paths::set(doc.as_inner_mut(), &segments, value)?,
    }
    Ok(Reply::ok())
}

fn json_get(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    Ok(match lookup(docs, args.text(0), args.path(1))? {
        Some(value) => Reply::Bulk(value.to_string()),
        None => Reply::Nil,
    })
}

fn json_mget(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(2, usize::MAX)?;
    let (path, keys) = args
        .values
        .split_last()
        .ok_or_else(|| StoreError::WrongArity(args.name.to_string()))?;
    let segments = segments(path)?;

    let replies = keys
        .iter()
        .map(|key| {
            docs.get(key)
                .and_then(|doc| paths::get(doc.as_inner(), &segments))
                .map(|value| Reply::Bulk(value.to_string()))
                .unwrap_or(Reply::Nil)
        })
        .collect();
    Ok(Reply::Array(replies))
}

fn json_del(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    let key = args.text(0);
    let segments = segments(args.path(1))?;

    let removed = if segments.is_empty() {
        docs.remove(key).is_some()
    } else {
        docs.get_mut(key)
            .and_then(|doc| paths::delete(doc.as_inner_mut(), &segments))
            .is_some()
    };
    Ok(Reply::Integer(i64::from(removed)))
}

fn json_type(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    Ok(match lookup(docs, args.text(0), args.path(1))? {
        Some(value) => Reply::Status(JsonType::of(value).as_str().to_string()),
        None => Reply::Nil,
    })
}

fn json_resp(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    Ok(lookup(docs, args.text(0), args.path(1))?
        .map(to_resp)
        .unwrap_or(Reply::Nil))
}

/// `JSON.DEBUG MEMORY key [path]`: approximate size in bytes of the value,
/// taken as the length of its compact JSON text.
fn json_debug(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(2, 3)?;
    if !args.text(0).eq_ignore_ascii_case("MEMORY") {
        return Err(StoreError::UnknownSubcommand {
            command: args.name.to_string(),
            subcommand: args.text(0).to_string(),
        });
    }
    Ok(match lookup(docs, args.text(1), args.path(2))? {
        Some(value) => length(value.to_string().len()),
        None => Reply::Nil,
    })
}

/// RESP rendering of a value
///
/// Arrays lead with a `[` status, objects with `{` followed by
/// alternating key and value replies.
fn to_resp(value: &Value) -> Reply {
    match value {
        Value::Null => Reply::Nil,
        Value::Bool(b) => Reply::Status(b.to_string()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Reply::Integer(i),
            None => Reply::Bulk(n.to_string()),
        },
        Value::String(s) => Reply::Bulk(s.clone()),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len() + 1);
            out.push(Reply::Status("[".to_string()));
            out.extend(items.iter().map(to_resp));
            Reply::Array(out)
        }
        Value::Object(obj) => {
            let mut out = Vec::with_capacity(obj.len() * 2 + 1);
            out.push(Reply::Status("{".to_string()));
            for (k, v) in obj {
                out.push(Reply::Bulk(k.clone()));
                out.push(to_resp(v));
            }
            Reply::Array(out)
        }
    }
}

// =============================================================================
// Number commands
// =============================================================================

#[derive(Clone, Copy)]
enum NumOp {
    Add,
    Mul,
}

fn json_num_op(docs: &mut Documents, args: Args<'_>, op: NumOp) -> HandlerResult {
    args.arity(3, 3)?;
    let operand = args.number(2)?;
    let target = lookup_mut(docs, args.text(0), args.text(1))?;
    let current = match &*target {
        Value::Number(n) => n.clone(),
        other => return Err(wrong_type("a number", other)),
    };

    let result = apply_num_op(op, &current, &operand)?;
    *target = Value::Number(result.clone());
    Ok(Reply::Bulk(result.to_string()))
}

/// Integer arithmetic while both sides are integers and it does not
/// overflow; floating point otherwise.
fn apply_num_op(op: NumOp, current: &Number, operand: &Number) -> Result<Number, StoreError> {
    if let (Some(a), Some(b)) = (current.as_i64(), operand.as_i64()) {
        let exact = match op {
            NumOp::Add => a.checked_add(b),
            NumOp::Mul => a.checked_mul(b),
        };
        if let Some(n) = exact {
            return Ok(n.into());
        }
    }

    let a = current.as_f64().ok_or(StoreError::NotANumber)?;
    let b = operand.as_f64().ok_or(StoreError::NotANumber)?;
    let result = match op {
        NumOp::Add => a + b,
        NumOp::Mul => a * b,
    };
    Number::from_f64(result).ok_or(StoreError::NonFinite)
}

// =============================================================================
// String commands
// =============================================================================

fn json_strappend(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(3, 3)?;
    let suffix = match args.json(2)? {
        Value::String(s) => s,
        _ => return Err(StoreError::UnexpectedArgument("a string")),
    };
    match lookup_mut(docs, args.text(0), args.text(1))? {
        Value::String(s) => {
            s.push_str(&suffix);
            Ok(length(s.len()))
        }
        other => Err(wrong_type("a string", other)),
    }
}

fn json_strlen(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    match lookup(docs, args.text(0), args.path(1))? {
        None => Ok(Reply::Nil),
        Some(Value::String(s)) => Ok(length(s.len())),
        Some(other) => Err(wrong_type("a string", other)),
    }
}

// =============================================================================
// Array commands
// =============================================================================

fn array_mut<'d>(docs: &'d mut Documents, key: &str, path: &str) -> Result<&'d mut Vec<Value>, StoreError> {
    match lookup_mut(docs, key, path)? {
        Value::Array(arr) => Ok(arr),
        other => Err(wrong_type("an array", other)),
    }
}

fn json_arrappend(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(3, usize::MAX)?;
    let values = (2..args.len())
        .map(|i| args.json(i))
        .collect::<Result<Vec<_>, _>>()?;
    let arr = array_mut(docs, args.text(0), args.text(1))?;
    arr.extend(values);
    Ok(length(arr.len()))
}

fn json_arrindex(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(3, 5)?;
    let needle = args.json(2)?;
    let start = if args.len() > 3 { args.integer(3)? } else { 0 };
    let stop = if args.len() > 4 { args.integer(4)? } else { 0 };

    let arr = match lookup(docs, args.text(0), args.text(1))? {
        None => return Ok(Reply::Nil),
        Some(Value::Array(arr)) => arr,
        Some(other) => return Err(wrong_type("an array", other)),
    };

    let len = arr.len() as i64;
    let from = if start < 0 { (len + start).max(0) } else { start.min(len) };
    // 0 means "to the end"; otherwise exclusive
    let to = match stop {
        0 => len,
        s if s < 0 => (len + s).max(0),
        s => s.min(len),
    };
    if from >= to {
        return Ok(Reply::Integer(-1));
    }

    let found = arr[from as usize..to as usize]
        .iter()
        .position(|v| *v == needle)
        .map(|i| i as i64 + from)
        .unwrap_or(-1);
    Ok(Reply::Integer(found))
}

fn json_arrinsert(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(4, usize::MAX)?;
    let index = args.integer(2)?;
    let values = (3..args.len())
        .map(|i| args.json(i))
        .collect::<Result<Vec<_>, _>>()?;

    let arr = array_mut(docs, args.text(0), args.text(1))?;
    let len = arr.len() as i64;
    let at = if index < 0 { len + index } else { index };
    if !(0..=len).contains(&at) {
        return Err(StoreError::IndexOutOfRange);
    }
    let at = at as usize;
    arr.splice(at..at, values);
    Ok(length(arr.len()))
}

fn json_arrlen(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    match lookup(docs, args.text(0), args.path(1))? {
        None => Ok(Reply::Nil),
        Some(Value::Array(arr)) => Ok(length(arr.len())),
        Some(other) => Err(wrong_type("an array", other)),
    }
}

fn json_arrpop(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 3)?;
    let index = if args.len() > 2 { args.integer(2)? } else { -1 };

    let arr = array_mut(docs, args.text(0), args.path(1))?;
    if arr.is_empty() {
        return Ok(Reply::Nil);
    }
    // out-of-range indices pop the nearest end
    let last = arr.len() - 1;
    let at = normalize_index(index, arr.len()).unwrap_or(if index < 0 { 0 } else { last });
    let popped = arr.remove(at);
    Ok(Reply::Bulk(popped.to_string()))
}

fn json_arrtrim(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(4, 4)?;
    let start = args.integer(2)?;
    let stop = args.integer(3)?;

    let arr = array_mut(docs, args.text(0), args.text(1))?;
    let len = arr.len() as i64;
    let from = if start < 0 { (len + start).max(0) } else { start };
    let to = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || from >= len || from > to {
        arr.clear();
    } else {
        arr.truncate(to as usize + 1);
        arr.drain(..from as usize);
    }
    Ok(length(arr.len()))
}

// =============================================================================
// Object commands
// =============================================================================

fn json_objkeys(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    match lookup(docs, args.text(0), args.path(1))? {
        None => Ok(Reply::Nil),
        Some(Value::Object(obj)) => Ok(Reply::Array(
            obj.keys().map(|k| Reply::Bulk(k.clone())).collect(),
        )),
        Some(other) => Err(wrong_type("an object", other)),
    }
}

fn json_objlen(docs: &mut Documents, args: Args<'_>) -> HandlerResult {
    args.arity(1, 2)?;
    match lookup(docs, args.text(0), args.path(1))? {
        None => Ok(Reply::Nil),
        Some(Value::Object(obj)) => Ok(length(obj.len())),
        Some(other) => Err(wrong_type("an object", other)),
    }
}
