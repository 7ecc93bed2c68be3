//! # Scalar Accessors
//!
//! Every `select_*` function here is the maybe-form: `Ok(None)` when the
//! path is absent or `null`, an error when the node has the wrong kind or
//! does not convert. Every `require_*` function fails exactly when its
//! `select_*` twin returns `Ok(None)`, with [`JsonSelectionError::Missing`].

use jsel_core::{require, JsonSelectionError};
use serde_json::Value;

use crate::checked::select_token;
use crate::element::FromJsonElement;

/// Select the node at `path` and convert it with `T`'s element rules.
///
/// # Errors
///
/// - [`JsonSelectionError::InvalidPath`] if `path` does not parse.
/// - [`JsonSelectionError::KindMismatch`] if the node's kind is not in
///   `T::accepted_kinds()`.
/// - [`JsonSelectionError::Conversion`] if the content does not convert.
pub fn select_as<T: FromJsonElement>(
    root: &Value,
    path: &str,
) -> Result<Option<T>, JsonSelectionError> {
    select_token(root, path, T::accepted_kinds())?
        .map(|node| {
            T::from_element(node).map_err(|source| JsonSelectionError::Conversion {
                path: path.to_string(),
                target: T::TARGET,
                source,
            })
        })
        .transpose()
}

/// Required form of [`select_as`].
pub fn require_as<T: FromJsonElement>(root: &Value, path: &str) -> Result<T, JsonSelectionError> {
    require(select_as(root, path)?, path)
}

/// Select a string without copying it.
pub fn select_str<'a>(root: &'a Value, path: &str) -> Result<Option<&'a str>, JsonSelectionError> {
    let node = select_token(root, path, String::accepted_kinds())?;
    Ok(node.and_then(Value::as_str))
}

pub fn require_str<'a>(root: &'a Value, path: &str) -> Result<&'a str, JsonSelectionError> {
    require(select_str(root, path)?, path)
}

pub fn select_string(root: &Value, path: &str) -> Result<Option<String>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_string(root: &Value, path: &str) -> Result<String, JsonSelectionError> {
    require_as(root, path)
}

pub fn select_bool(root: &Value, path: &str) -> Result<Option<bool>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_bool(root: &Value, path: &str) -> Result<bool, JsonSelectionError> {
    require_as(root, path)
}

/// Select an `Integer` node as `i64`. Unsigned values above `i64::MAX`
/// fail with a conversion error.
pub fn select_i64(root: &Value, path: &str) -> Result<Option<i64>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_i64(root: &Value, path: &str) -> Result<i64, JsonSelectionError> {
    require_as(root, path)
}

/// Select an `Integer` node as `i32`. Values outside `i32` fail with a
/// conversion error.
pub fn select_i32(root: &Value, path: &str) -> Result<Option<i32>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_i32(root: &Value, path: &str) -> Result<i32, JsonSelectionError> {
    require_as(root, path)
}

/// Select a `Float` node. A whole-number literal such as `12` is an
/// `Integer` and fails with a kind mismatch.
pub fn select_f64(root: &Value, path: &str) -> Result<Option<f64>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_f64(root: &Value, path: &str) -> Result<f64, JsonSelectionError> {
    require_as(root, path)
}

pub fn select_f32(root: &Value, path: &str) -> Result<Option<f32>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_f32(root: &Value, path: &str) -> Result<f32, JsonSelectionError> {
    require_as(root, path)
}
