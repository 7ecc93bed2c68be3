//! # Element Conversion
//!
//! `FromJsonElement` is the closed set of target types a node can be
//! converted into. Each implementation names the kinds it accepts and how
//! a node of those kinds becomes the target value. The same rules apply
//! whether the node is selected directly or is an element of an array
//! selected with `select_list`.
//!
//! | Type | Accepted kinds | Conversion |
//! |---|---|---|
//! | `String` | String | copy of the text |
//! | `bool` | Boolean | identity |
//! | `i64`, `i32` | Integer | exact, range-checked |
//! | `f64`, `f32` | Float | exact, range-checked for `f32` |
//! | `Uuid` | String | `Uuid::parse_str` |
//! | `JsonDateTime` | String, DateTime | pinned ISO-8601 profile |
//! | `Value` | every kind but Null | clone |
//! | `Vec<T>` | Array | element-wise, failing on the first bad element |

use jsel_core::{ConversionError, JsonDateTime, JsonKind, KindSet};
use serde_json::{Number, Value};
use uuid::Uuid;

/// A type a JSON node can be converted into.
pub trait FromJsonElement: Sized {
    /// Name of the target type, used in error messages.
    const TARGET: &'static str;

    /// Kinds a node must have to be converted.
    fn accepted_kinds() -> KindSet;

    /// Convert a node.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Kind`] for a node outside
    /// [`accepted_kinds()`](Self::accepted_kinds), or a value-level
    /// [`ConversionError`] when the content does not convert.
    fn from_element(node: &Value) -> Result<Self, ConversionError>;
}

fn kind_error<T: FromJsonElement>(node: &Value) -> ConversionError {
    ConversionError::Kind {
        actual: JsonKind::of(node),
        expected: T::accepted_kinds(),
    }
}

fn out_of_range(n: &Number, target: &'static str) -> ConversionError {
    ConversionError::OutOfRange {
        value: n.to_string(),
        target,
    }
}

/// The number behind an `Integer` node.
fn integer_number(node: &Value) -> Option<&Number> {
    match node {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n),
        _ => None,
    }
}

/// The value behind a `Float` node.
fn float_value(node: &Value) -> Option<f64> {
    match node {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => n.as_f64(),
        _ => None,
    }
}

impl FromJsonElement for String {
    const TARGET: &'static str = "string";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::String)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        node.as_str()
            .map(str::to_owned)
            .ok_or_else(|| kind_error::<Self>(node))
    }
}

impl FromJsonElement for bool {
    const TARGET: &'static str = "bool";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::Boolean)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        node.as_bool().ok_or_else(|| kind_error::<Self>(node))
    }
}

impl FromJsonElement for i64 {
    const TARGET: &'static str = "i64";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::Integer)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        let n = integer_number(node).ok_or_else(|| kind_error::<Self>(node))?;
        n.as_i64().ok_or_else(|| out_of_range(n, Self::TARGET))
    }
}

impl FromJsonElement for i32 {
    const TARGET: &'static str = "i32";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::Integer)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        let n = integer_number(node).ok_or_else(|| kind_error::<Self>(node))?;
        n.as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| out_of_range(n, Self::TARGET))
    }
}

impl FromJsonElement for f64 {
    const TARGET: &'static str = "f64";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::Float)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        float_value(node).ok_or_else(|| kind_error::<Self>(node))
    }
}

impl FromJsonElement for f32 {
    const TARGET: &'static str = "f32";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::Float)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        let wide = float_value(node).ok_or_else(|| kind_error::<Self>(node))?;
        let narrow = wide as f32;
        if narrow.is_infinite() && wide.is_finite() {
            return Err(ConversionError::OutOfRange {
                value: wide.to_string(),
                target: Self::TARGET,
            });
        }
        Ok(narrow)
    }
}

impl FromJsonElement for Uuid {
    const TARGET: &'static str = "uuid";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::String)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        let text = node.as_str().ok_or_else(|| kind_error::<Self>(node))?;
        Ok(Uuid::parse_str(text)?)
    }
}

impl FromJsonElement for JsonDateTime {
    const TARGET: &'static str = "datetime";

    fn accepted_kinds() -> KindSet {
        KindSet::of(&[JsonKind::String, JsonKind::DateTime])
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        let text = node.as_str().ok_or_else(|| kind_error::<Self>(node))?;
        JsonDateTime::parse_iso8601(text)
    }
}

impl FromJsonElement for Value {
    const TARGET: &'static str = "token";

    fn accepted_kinds() -> KindSet {
        KindSet::of(&[
            JsonKind::Boolean,
            JsonKind::Integer,
            JsonKind::Float,
            JsonKind::String,
            JsonKind::DateTime,
            JsonKind::Array,
            JsonKind::Object,
        ])
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        if node.is_null() {
            return Err(kind_error::<Self>(node));
        }
        Ok(node.clone())
    }
}

impl<T: FromJsonElement> FromJsonElement for Vec<T> {
    const TARGET: &'static str = "list";

    fn accepted_kinds() -> KindSet {
        KindSet::single(JsonKind::Array)
    }

    fn from_element(node: &Value) -> Result<Self, ConversionError> {
        let items = node.as_array().ok_or_else(|| kind_error::<Self>(node))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_element(item).map_err(|e| e.at_index(index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_element() {
        assert_eq!(String::from_element(&json!("a b")).unwrap(), "a b");
        assert!(matches!(
            String::from_element(&json!(1)),
            Err(ConversionError::Kind { actual: JsonKind::Integer, .. })
        ));
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(i64::from_element(&json!(12)).unwrap(), 12);
        assert_eq!(i64::from_element(&json!(i64::MIN)).unwrap(), i64::MIN);
        assert!(matches!(
            i64::from_element(&json!(u64::MAX)),
            Err(ConversionError::OutOfRange { target: "i64", .. })
        ));
        assert_eq!(i32::from_element(&json!(-2_147_483_648_i64)).unwrap(), i32::MIN);
        assert!(matches!(
            i32::from_element(&json!(4_294_967_296_i64)),
            Err(ConversionError::OutOfRange { target: "i32", .. })
        ));
    }

    #[test]
    fn test_integer_rejects_float_literal() {
        let doc: Value = serde_json::from_str("[12.0]").unwrap();
        assert!(matches!(
            i64::from_element(&doc[0]),
            Err(ConversionError::Kind { actual: JsonKind::Float, .. })
        ));
    }

    #[test]
    fn test_float_rejects_integer_literal() {
        let doc: Value = serde_json::from_str("[12, -127.0]").unwrap();
        assert!(matches!(
            f64::from_element(&doc[0]),
            Err(ConversionError::Kind { actual: JsonKind::Integer, .. })
        ));
        assert_eq!(f64::from_element(&doc[1]).unwrap(), -127.0);
        assert_eq!(f32::from_element(&doc[1]).unwrap(), -127.0_f32);
    }

    #[test]
    fn test_f32_overflow() {
        assert!(matches!(
            f32::from_element(&json!(1.0e300)),
            Err(ConversionError::OutOfRange { target: "f32", .. })
        ));
    }

    #[test]
    fn test_uuid_element() {
        let id = Uuid::from_element(&json!("8c69a274-e68b-4b5e-bc1b-a465d234c2c0")).unwrap();
        assert_eq!(id.to_string(), "8c69a274-e68b-4b5e-bc1b-a465d234c2c0");
        assert!(matches!(
            Uuid::from_element(&json!("hello")),
            Err(ConversionError::Uuid(_))
        ));
    }

    #[test]
    fn test_value_element_rejects_null() {
        assert_eq!(Value::from_element(&json!({"a": 1})).unwrap(), json!({"a": 1}));
        assert!(Value::from_element(&json!(null)).is_err());
    }

    #[test]
    fn test_vec_reports_offending_index() {
        let err = Vec::<String>::from_element(&json!(["a", "b", 3, "d"])).unwrap_err();
        assert!(matches!(err, ConversionError::Element { index: 2, .. }));
        assert_eq!(
            err.to_string(),
            "element 2: unexpected kind Integer (expected one of String)"
        );
    }

    #[test]
    fn test_vec_of_vec() {
        let nested = Vec::<Vec<i64>>::from_element(&json!([[1, 2], [], [3]])).unwrap();
        assert_eq!(nested, vec![vec![1, 2], vec![], vec![3]]);
        let err = Vec::<Vec<i64>>::from_element(&json!([[1], [2, "x"]])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "element 1: element 1: unexpected kind String (expected one of Integer)"
        );
    }
}
