//! # Collection Accessors
//!
//! Homogeneous arrays and nested objects.
//!
//! A list is converted element by element with the element type's rules
//! (see [`FromJsonElement`]); the first element that fails aborts the
//! whole selection with a conversion error naming its index. Objects are
//! returned as borrowed sub-trees for further navigation.

use jsel_core::{require, JsonKind, JsonSelectionError, KindSet};
use serde_json::{Map, Value};

use crate::checked::select_token;
use crate::element::FromJsonElement;
use crate::scalar::select_as;

/// Select an array and convert every element to `T`, preserving order.
///
/// # Errors
///
/// - [`JsonSelectionError::KindMismatch`] if the node is not an array.
/// - [`JsonSelectionError::Conversion`] if any element has the wrong kind
///   or does not convert; the message names the element index.
pub fn select_list<T: FromJsonElement>(
    root: &Value,
    path: &str,
) -> Result<Option<Vec<T>>, JsonSelectionError> {
    select_as::<Vec<T>>(root, path)
}

pub fn require_list<T: FromJsonElement>(
    root: &Value,
    path: &str,
) -> Result<Vec<T>, JsonSelectionError> {
    require(select_list(root, path)?, path)
}

/// Select an object sub-tree without copying it.
pub fn select_object<'a>(
    root: &'a Value,
    path: &str,
) -> Result<Option<&'a Map<String, Value>>, JsonSelectionError> {
    let node = select_token(root, path, KindSet::single(JsonKind::Object))?;
    Ok(node.and_then(Value::as_object))
}

pub fn require_object<'a>(
    root: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, JsonSelectionError> {
    require(select_object(root, path)?, path)
}
