//! # Selector — Accessors Bound to One Document
//!
//! [`Selector`] is a `Copy` view over a parsed JSON tree. Its methods are
//! the free functions of this crate with the root argument filled in, so
//! a caller reading many fields writes `sel.require_string("$.name")`
//! instead of threading the root through every call.
//!
//! The view only borrows; selections never mutate the tree, so any number
//! of selectors over the same document can be used from any number of
//! threads at once.

use jsel_core::{JsonDateTime, JsonKind, JsonSelectionError, KindSet, SelectionOutcome};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::element::FromJsonElement;
use crate::{checked, collection, identity, scalar, temporal};

/// Typed accessors over a borrowed JSON tree.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    root: &'a Value,
}

impl<'a> Selector<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// The tree this selector reads from.
    pub fn root(&self) -> &'a Value {
        self.root
    }

    pub fn select_checked(
        &self,
        path: &str,
        expected: KindSet,
    ) -> Result<SelectionOutcome<&'a Value>, JsonSelectionError> {
        checked::select_checked(self.root, path, expected)
    }

    pub fn select_token(
        &self,
        path: &str,
        expected: KindSet,
    ) -> Result<Option<&'a Value>, JsonSelectionError> {
        checked::select_token(self.root, path, expected)
    }

    pub fn require_token(&self, path: &str, expected: KindSet) -> Result<&'a Value, JsonSelectionError> {
        checked::require_token(self.root, path, expected)
    }

    pub fn select_as<T: FromJsonElement>(&self, path: &str) -> Result<Option<T>, JsonSelectionError> {
        scalar::select_as(self.root, path)
    }

    pub fn require_as<T: FromJsonElement>(&self, path: &str) -> Result<T, JsonSelectionError> {
        scalar::require_as(self.root, path)
    }

    pub fn select_str(&self, path: &str) -> Result<Option<&'a str>, JsonSelectionError> {
        scalar::select_str(self.root, path)
    }

    pub fn require_str(&self, path: &str) -> Result<&'a str, JsonSelectionError> {
        scalar::require_str(self.root, path)
    }

    pub fn select_string(&self, path: &str) -> Result<Option<String>, JsonSelectionError> {
        scalar::select_string(self.root, path)
    }

    pub fn require_string(&self, path: &str) -> Result<String, JsonSelectionError> {
        scalar::require_string(self.root, path)
    }

    pub fn select_bool(&self, path: &str) -> Result<Option<bool>, JsonSelectionError> {
        scalar::select_bool(self.root, path)
    }

    pub fn require_bool(&self, path: &str) -> Result<bool, JsonSelectionError> {
        scalar::require_bool(self.root, path)
    }

    pub fn select_i64(&self, path: &str) -> Result<Option<i64>, JsonSelectionError> {
        scalar::select_i64(self.root, path)
    }

    pub fn require_i64(&self, path: &str) -> Result<i64, JsonSelectionError> {
        scalar::require_i64(self.root, path)
    }

    pub fn select_i32(&self, path: &str) -> Result<Option<i32>, JsonSelectionError> {
        scalar::select_i32(self.root, path)
    }

    pub fn require_i32(&self, path: &str) -> Result<i32, JsonSelectionError> {
        scalar::require_i32(self.root, path)
    }

    pub fn select_f64(&self, path: &str) -> Result<Option<f64>, JsonSelectionError> {
        scalar::select_f64(self.root, path)
    }

    pub fn require_f64(&self, path: &str) -> Result<f64, JsonSelectionError> {
        scalar::require_f64(self.root, path)
    }

    pub fn select_f32(&self, path: &str) -> Result<Option<f32>, JsonSelectionError> {
        scalar::select_f32(self.root, path)
    }

    pub fn require_f32(&self, path: &str) -> Result<f32, JsonSelectionError> {
        scalar::require_f32(self.root, path)
    }

    pub fn select_list<T: FromJsonElement>(&self, path: &str) -> Result<Option<Vec<T>>, JsonSelectionError> {
        collection::select_list(self.root, path)
    }

    pub fn require_list<T: FromJsonElement>(&self, path: &str) -> Result<Vec<T>, JsonSelectionError> {
        collection::require_list(self.root, path)
    }

    pub fn select_object(&self, path: &str) -> Result<Option<&'a Map<String, Value>>, JsonSelectionError> {
        collection::select_object(self.root, path)
    }

    pub fn require_object(&self, path: &str) -> Result<&'a Map<String, Value>, JsonSelectionError> {
        collection::require_object(self.root, path)
    }

    pub fn select_datetime(&self, path: &str) -> Result<Option<JsonDateTime>, JsonSelectionError> {
        temporal::select_datetime(self.root, path)
    }

    pub fn require_datetime(&self, path: &str) -> Result<JsonDateTime, JsonSelectionError> {
        temporal::require_datetime(self.root, path)
    }

    pub fn select_datetime_with_format(
        &self,
        path: &str,
        format: &str,
    ) -> Result<Option<JsonDateTime>, JsonSelectionError> {
        temporal::select_datetime_with_format(self.root, path, format)
    }

    pub fn require_datetime_with_format(
        &self,
        path: &str,
        format: &str,
    ) -> Result<JsonDateTime, JsonSelectionError> {
        temporal::require_datetime_with_format(self.root, path, format)
    }

    pub fn select_uuid(&self, path: &str) -> Result<Option<Uuid>, JsonSelectionError> {
        identity::select_uuid(self.root, path)
    }

    pub fn require_uuid(&self, path: &str) -> Result<Uuid, JsonSelectionError> {
        identity::require_uuid(self.root, path)
    }

    /// A selector rooted at the object found at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`require_token`](Self::require_token) with the `Object`
    /// kind: missing, `null` or non-object nodes fail.
    pub fn scope(&self, path: &str) -> Result<Selector<'a>, JsonSelectionError> {
        let node = self.require_token(path, KindSet::single(JsonKind::Object))?;
        Ok(Selector::new(node))
    }
}

impl<'a> From<&'a Value> for Selector<'a> {
    fn from(root: &'a Value) -> Self {
        Self::new(root)
    }
}
