//! # JSON Kinds — Structural Categories of a Node
//!
//! Defines `JsonKind`, the one taxonomy every shape check in the selection
//! layer is expressed in, and `KindSet`, the set of kinds an accessor
//! accepts.
//!
//! ## Integer vs Float
//!
//! The split between `Integer` and `Float` follows the literal, not the
//! numeric value: `12` is an `Integer`, `12.0` is a `Float`. `serde_json`
//! keeps that distinction in `Number`, and accessors rely on it.
//!
//! ## DateTime
//!
//! `serde_json` has no date/time literal, so [`JsonKind::of`] never
//! reports `DateTime`. The kind stays in the taxonomy because the date
//! accessors accept `{String, DateTime}` and name it in their mismatch
//! messages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Structural category of a JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JsonKind {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A number written without fraction or exponent that fits `i64`/`u64`.
    ///
    /// A whole-number literal beyond `u64::MAX` is stored by `serde_json` as
    /// an `f64` and cannot be told apart from an exponent literal, so it is
    /// `Float`. Integer accessors report it as a kind mismatch rather than
    /// an out-of-range conversion.
    Integer,
    /// Any other number, including whole-number literals beyond `u64::MAX`.
    Float,
    /// A string.
    String,
    /// A date/time literal.
    DateTime,
    /// An ordered sequence.
    Array,
    /// A key/value mapping.
    Object,
}

/// Total number of kinds.
pub const JSON_KIND_COUNT: usize = 8;

impl JsonKind {
    /// Returns every kind in canonical order.
    pub fn all_kinds() -> &'static [JsonKind] {
        &[
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::String,
            Self::DateTime,
            Self::Array,
            Self::Object,
        ]
    }

    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns the identifier for this kind, matching its serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::DateTime => "DateTime",
            Self::Array => "Array",
            Self::Object => "Object",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonKind {
    type Err = UnknownKindError;

    /// Parse a kind from the identifier produced by [`JsonKind::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_kinds()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

/// A kind identifier that is not one of [`JsonKind::all_kinds()`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown JSON kind: {0:?}")]
pub struct UnknownKindError(pub String);

/// A set of [`JsonKind`]s, stored as a bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<JsonKind>", from = "Vec<JsonKind>")]
pub struct KindSet(u16);

impl KindSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every kind.
    pub fn any() -> Self {
        Self::of(JsonKind::all_kinds())
    }

    /// A set holding exactly one kind.
    pub fn single(kind: JsonKind) -> Self {
        Self(kind.bit())
    }

    /// A set holding the given kinds.
    pub fn of(kinds: &[JsonKind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, kind| set.with(*kind))
    }

    /// Returns a copy of this set with `kind` added.
    #[must_use]
    pub fn with(self, kind: JsonKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn contains(&self, kind: JsonKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the kinds in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = JsonKind> + '_ {
        JsonKind::all_kinds()
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }
}

impl From<JsonKind> for KindSet {
    fn from(kind: JsonKind) -> Self {
        Self::single(kind)
    }
}

impl From<Vec<JsonKind>> for KindSet {
    fn from(kinds: Vec<JsonKind>) -> Self {
        Self::of(&kinds)
    }
}

impl From<KindSet> for Vec<JsonKind> {
    fn from(set: KindSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing");
        }
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.as_str())?;
        }
        Ok(())
    }
}
