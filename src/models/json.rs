//! Field accessors over decoded JSON used by the entity decoders.
//!
//! Required fields fail with [`Error::MalformedEntity`] when missing or
//! mistyped. Optional fields fall back to the type's default when the key is
//! absent or `null`; a present value of the wrong type is still an error.
//! Nested optional paths go through [`Value::pointer`], which stops at the
//! first step whose shape does not match.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::timestamp;
use crate::{Error, Result};

pub(crate) type Object = Map<String, Value>;

/// View a value as a JSON object, naming `what` in the error.
pub(crate) fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| Error::malformed(format!("{} is not a JSON object", what)))
}

fn present<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn wrong_type(key: &str, expected: &str, found: &Value) -> Error {
    Error::malformed(format!("field `{}` should be {}, found {}", key, expected, found))
}

pub(crate) fn required_u64(obj: &Object, key: &str) -> Result<u64> {
    let value = present(obj, key)
        .ok_or_else(|| Error::malformed(format!("missing required field `{}`", key)))?;
    value.as_u64().ok_or_else(|| wrong_type(key, "an unsigned integer", value))
}

pub(crate) fn optional_u64(obj: &Object, key: &str) -> Result<u64> {
    match present(obj, key) {
        None => Ok(0),
        Some(v) => v.as_u64().ok_or_else(|| wrong_type(key, "an unsigned integer", v)),
    }
}

pub(crate) fn optional_string(obj: &Object, key: &str) -> Result<String> {
    match present(obj, key) {
        None => Ok(String::new()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| wrong_type(key, "a string", v)),
    }
}

pub(crate) fn optional_bool(obj: &Object, key: &str) -> Result<bool> {
    match present(obj, key) {
        None => Ok(false),
        Some(v) => v.as_bool().ok_or_else(|| wrong_type(key, "a boolean", v)),
    }
}

/// Absent timestamps default to the Unix epoch; malformed ones fail.
pub(crate) fn optional_timestamp(obj: &Object, key: &str) -> Result<DateTime<Utc>> {
    match present(obj, key) {
        None => Ok(DateTime::<Utc>::default()),
        Some(v) => {
            let s = v.as_str().ok_or_else(|| wrong_type(key, "a timestamp string", v))?;
            timestamp::parse(s)
        }
    }
}

/// Follow a JSON pointer and return the string at its end, if every step
/// matched.
pub(crate) fn string_at(value: &Value, pointer: &str) -> Option<String> {
    value.pointer(pointer).and_then(Value::as_str).map(str::to_string)
}

/// Decode each element of a JSON array.
///
/// # Errors
///
/// Fails if `value` is not an array or any element fails to decode.
pub fn decode_array<T, F>(value: &Value, mut decode: F) -> Result<Vec<T>>
where
    F: FnMut(&Value) -> Result<T>,
{
    value
        .as_array()
        .ok_or_else(|| Error::malformed("expected a JSON array"))?
        .iter()
        .map(&mut decode)
        .collect()
}
