//! # Document — Accessors Over Raw JSON Text
//!
//! [`Document`] owns a parsed tree so callers holding JSON text can select
//! from it without managing a `Value` themselves. Parse failures surface
//! as [`JsonSelectionError::Parse`]; after parsing, every accessor behaves
//! exactly like its free-function counterpart.

use std::str::FromStr;

use jsel_core::{JsonDateTime, JsonSelectionError, KindSet, SelectionOutcome};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::element::FromJsonElement;
use crate::selector::Selector;

/// A parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    value: Value,
}

impl Document {
    /// Parse JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`JsonSelectionError::Parse`] if `text` is not valid JSON.
    pub fn parse(text: &str) -> Result<Self, JsonSelectionError> {
        Ok(Self {
            value: serde_json::from_str(text)?,
        })
    }

    /// Parse JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`JsonSelectionError::Parse`] if `bytes` are not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, JsonSelectionError> {
        Ok(Self {
            value: serde_json::from_slice(bytes)?,
        })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn selector(&self) -> Selector<'_> {
        Selector::new(&self.value)
    }

    pub fn select_checked(
        &self,
        path: &str,
        expected: KindSet,
    ) -> Result<SelectionOutcome<&Value>, JsonSelectionError> {
        self.selector().select_checked(path, expected)
    }

    pub fn select_token(&self, path: &str, expected: KindSet) -> Result<Option<&Value>, JsonSelectionError> {
        self.selector().select_token(path, expected)
    }

    pub fn require_token(&self, path: &str, expected: KindSet) -> Result<&Value, JsonSelectionError> {
        self.selector().require_token(path, expected)
    }

    pub fn select_as<T: FromJsonElement>(&self, path: &str) -> Result<Option<T>, JsonSelectionError> {
        self.selector().select_as(path)
    }

    pub fn require_as<T: FromJsonElement>(&self, path: &str) -> Result<T, JsonSelectionError> {
        self.selector().require_as(path)
    }

    pub fn select_str(&self, path: &str) -> Result<Option<&str>, JsonSelectionError> {
        self.selector().select_str(path)
    }

    pub fn require_str(&self, path: &str) -> Result<&str, JsonSelectionError> {
        self.selector().require_str(path)
    }

    pub fn select_string(&self, path: &str) -> Result<Option<String>, JsonSelectionError> {
        self.selector().select_string(path)
    }

    pub fn require_string(&self, path: &str) -> Result<String, JsonSelectionError> {
        self.selector().require_string(path)
    }

    pub fn select_bool(&self, path: &str) -> Result<Option<bool>, JsonSelectionError> {
        self.selector().select_bool(path)
    }

    pub fn require_bool(&self, path: &str) -> Result<bool, JsonSelectionError> {
        self.selector().require_bool(path)
    }

    pub fn select_i64(&self, path: &str) -> Result<Option<i64>, JsonSelectionError> {
        self.selector().select_i64(path)
    }

    pub fn require_i64(&self, path: &str) -> Result<i64, JsonSelectionError> {
        self.selector().require_i64(path)
    }

    pub fn select_i32(&self, path: &str) -> Result<Option<i32>, JsonSelectionError> {
        self.selector().select_i32(path)
    }

    pub fn require_i32(&self, path: &str) -> Result<i32, JsonSelectionError> {
        self.selector().require_i32(path)
    }

    pub fn select_f64(&self, path: &str) -> Result<Option<f64>, JsonSelectionError> {
        self.selector().select_f64(path)
    }

    pub fn require_f64(&self, path: &str) -> Result<f64, JsonSelectionError> {
        self.selector().require_f64(path)
    }

    pub fn select_f32(&self, path: &str) -> Result<Option<f32>, JsonSelectionError> {
        self.selector().select_f32(path)
    }

    pub fn require_f32(&self, path: &str) -> Result<f32, JsonSelectionError> {
        self.selector().require_f32(path)
    }

    pub fn select_list<T: FromJsonElement>(&self, path: &str) -> Result<Option<Vec<T>>, JsonSelectionError> {
        self.selector().select_list(path)
    }

    pub fn require_list<T: FromJsonElement>(&self, path: &str) -> Result<Vec<T>, JsonSelectionError> {
        self.selector().require_list(path)
    }

    pub fn select_object(&self, path: &str) -> Result<Option<&Map<String, Value>>, JsonSelectionError> {
        self.selector().select_object(path)
    }

    pub fn require_object(&self, path: &str) -> Result<&Map<String, Value>, JsonSelectionError> {
        self.selector().require_object(path)
    }

    pub fn select_datetime(&self, path: &str) -> Result<Option<JsonDateTime>, JsonSelectionError> {
        self.selector().select_datetime(path)
    }

    pub fn require_datetime(&self, path: &str) -> Result<JsonDateTime, JsonSelectionError> {
        self.selector().require_datetime(path)
    }

    pub fn select_datetime_with_format(
        &self,
        path: &str,
        format: &str,
    ) -> Result<Option<JsonDateTime>, JsonSelectionError> {
        self.selector().select_datetime_with_format(path, format)
    }

    pub fn require_datetime_with_format(
        &self,
        path: &str,
        format: &str,
    ) -> Result<JsonDateTime, JsonSelectionError> {
        self.selector().require_datetime_with_format(path, format)
    }

    pub fn select_uuid(&self, path: &str) -> Result<Option<Uuid>, JsonSelectionError> {
        self.selector().select_uuid(path)
    }

    pub fn require_uuid(&self, path: &str) -> Result<Uuid, JsonSelectionError> {
        self.selector().require_uuid(path)
    }
}

impl FromStr for Document {
    type Err = JsonSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.value
    }
}
