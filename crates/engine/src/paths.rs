//! Path traversal over stored documents
//!
//! Operates on raw `serde_json::Value` trees with pre-parsed segments.
//! Unlike a general JSON patcher, `set` never creates intermediate
//! containers: the parent of the target must already exist.

use rejson_core::{JsonType, PathSegment};
use serde_json::Value;

use crate::StoreError;

/// Resolve a possibly negative index against an array length.
///
/// Returns `None` when the index falls outside `0..len`.
pub(crate) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = len as i64;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        Some(resolved as usize)
    } else {
        None
    }
}

/// Type tag of a raw value, for error replies
pub(crate) fn type_name(value: &Value) -> &'static str {
    JsonType::of(value).as_str()
}

/// Get value at path
pub(crate) fn get<'a>(root: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(obj)) => obj.get(key)?,
            (PathSegment::Index(idx), Value::Array(arr)) => {
                arr.get(normalize_index(*idx, arr.len())?)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Get mutable value at path
pub(crate) fn get_mut<'a>(root: &'a mut Value, segments: &[PathSegment]) -> Option<&'a mut Value> {
    let mut current = root;
    for segment in segments {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(obj)) => obj.get_mut(key)?,
            (PathSegment::Index(idx), Value::Array(arr)) => {
                let idx = normalize_index(*idx, arr.len())?;
                arr.get_mut(idx)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Set value at a non-root path
///
/// Object fields are inserted or replaced in place (an existing field keeps
/// its position). Array elements can only be replaced.
pub(crate) fn set(root: &mut Value, segments: &[PathSegment], value: Value) -> Result<(), StoreError> {
    let Some((last, parent_segments)) = segments.split_last() else {
        *root = value;
        return Ok(());
    };
    let parent = get_mut(root, parent_segments).ok_or(StoreError::MissingParent)?;

    match (last, parent) {
        (PathSegment::Key(key), Value::Object(obj)) => {
            obj.insert(key.clone(), value);
            Ok(())
        }
        (PathSegment::Index(idx), Value::Array(arr)) => {
            let idx = normalize_index(*idx, arr.len()).ok_or(StoreError::IndexOutOfRange)?;
            arr[idx] = value;
            Ok(())
        }
        (PathSegment::Key(_), other) => Err(StoreError::WrongType {
            expected: "an object",
            found: type_name(other),
        }),
        (PathSegment::Index(_), other) => Err(StoreError::WrongType {
            expected: "an array",
            found: type_name(other),
        }),
    }
}

/// Delete value at a non-root path
///
/// Returns the removed value, or `None` if nothing was there. Object
/// fields are removed without disturbing the order of their siblings.
pub(crate) fn delete(root: &mut Value, segments: &[PathSegment]) -> Option<Value> {
    let (last, parent_segments) = segments.split_last()?;
    match (last, get_mut(root, parent_segments)?) {
        (PathSegment::Key(key), Value::Object(obj)) => obj.shift_remove(key),
        (PathSegment::Index(idx), Value::Array(arr)) => {
            let idx = normalize_index(*idx, arr.len())?;
            Some(arr.remove(idx))
        }
        _ => None,
    }
}
