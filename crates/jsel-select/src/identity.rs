//! UUID accessors. Text that is not a UUID literal is a conversion error.

use jsel_core::{require, JsonSelectionError};
use serde_json::Value;
use uuid::Uuid;

use crate::scalar::select_as;

pub fn select_uuid(root: &Value, path: &str) -> Result<Option<Uuid>, JsonSelectionError> {
    select_as(root, path)
}

pub fn require_uuid(root: &Value, path: &str) -> Result<Uuid, JsonSelectionError> {
    require(select_uuid(root, path)?, path)
}
