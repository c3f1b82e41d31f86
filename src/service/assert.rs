//! Type assertions over generic JSON values.
//!
//! The `assert_as_*` functions are meant for generated client code that has
//! already been checked against the API model: a mismatch is a bug in the
//! caller and aborts with a panic. Use the `try_as_*` forms where the value
//! comes from somewhere less trusted.
//!
//! Panic and error messages render the offending value as JSON, so strings
//! keep their quotes: `"tea" is not a map`, `1.5 is not a int`.

use crate::utils::error::{Result, UtilError};
use serde_json::{Map, Value};

pub fn try_as_map(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| UtilError::type_mismatch(value, "map"))
}

/// Only integers pass. `1.5` is not a number here.
pub fn try_as_number(value: &Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| UtilError::type_mismatch(value, "int"))
}

pub fn try_as_boolean(value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| UtilError::type_mismatch(value, "bool"))
}

pub fn try_as_string(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| UtilError::type_mismatch(value, "string"))
}

/// # Panics
///
/// Panics with `"<value> is not a map"` when `value` is not a JSON object.
pub fn assert_as_map(value: &Value) -> &Map<String, Value> {
    try_as_map(value).unwrap_or_else(|e| panic!("{e}"))
}

/// # Panics
///
/// Panics with `"<value> is not a int"` when `value` is not an integer.
pub fn assert_as_number(value: &Value) -> i64 {
    try_as_number(value).unwrap_or_else(|e| panic!("{e}"))
}

/// # Panics
///
/// Panics with `"<value> is not a bool"` when `value` is not a boolean.
pub fn assert_as_boolean(value: &Value) -> bool {
    try_as_boolean(value).unwrap_or_else(|e| panic!("{e}"))
}

/// # Panics
///
/// Panics with `"<value> is not a string"` when `value` is not a string.
pub fn assert_as_string(value: &Value) -> &str {
    try_as_string(value).unwrap_or_else(|e| panic!("{e}"))
}
