//! # Path Resolution
//!
//! Walks a [`PathExpression`] over a `serde_json::Value` and returns the
//! node it names. The resolver has no opinion about kinds: it only yields
//! [`SelectionOutcome::Found`] or [`SelectionOutcome::Absent`].
//!
//! A step that cannot be taken (a key lookup on a non-object, a missing
//! key, an index on a non-array, an index past the end) ends the walk as
//! `Absent`. A walk that ends on `null` is also `Absent`.

use serde_json::Value;

use crate::error::JsonSelectionError;
use crate::outcome::SelectionOutcome;
use crate::path::{PathExpression, Segment};

/// Resolve `path` against `root`.
///
/// Never returns [`SelectionOutcome::TypeMismatch`].
pub fn resolve<'a>(root: &'a Value, path: &PathExpression) -> SelectionOutcome<&'a Value> {
    let mut current = root;
    for segment in path.segments() {
        match step(current, segment) {
            Some(next) => current = next,
            None => return SelectionOutcome::Absent,
        }
    }

    match current {
        Value::Null => SelectionOutcome::Absent,
        value => SelectionOutcome::Found(value),
    }
}

/// Parse `path` and resolve it against `root`.
///
/// # Errors
///
/// Returns [`JsonSelectionError::InvalidPath`] if `path` does not parse.
pub fn resolve_str<'a>(
    root: &'a Value,
    path: &str,
) -> Result<SelectionOutcome<&'a Value>, JsonSelectionError> {
    let expression = PathExpression::parse(path)?;
    Ok(resolve(root, &expression))
}

fn step<'a>(value: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (value, segment) {
        (Value::Object(map), Segment::Field(name)) => map.get(name),
        (Value::Array(items), Segment::Index(index)) => items.get(*index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved<'a>(root: &'a Value, path: &str) -> SelectionOutcome<&'a Value> {
        resolve_str(root, path).unwrap()
    }

    #[test]
    fn test_root_resolves_to_document() {
        let doc = json!({"a": 1});
        assert_eq!(resolved(&doc, "$"), SelectionOutcome::Found(&doc));
    }

    #[test]
    fn test_field_lookup() {
        let doc = json!({"field": "hello"});
        assert_eq!(resolved(&doc, "$.field"), SelectionOutcome::Found(&json!("hello")));
    }

    #[test]
    fn test_nested_fields_and_indices() {
        let doc = json!({"items": [{"name": "a"}, {"name": "b"}, {"name": "c"}]});
        assert_eq!(resolved(&doc, "$.items[2].name"), SelectionOutcome::Found(&json!("c")));
        assert_eq!(resolved(&doc, "$.items[0]"), SelectionOutcome::Found(&json!({"name": "a"})));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let doc = json!({});
        assert!(resolved(&doc, "$.field").is_absent());
    }

    #[test]
    fn test_null_literal_is_absent() {
        let doc = json!({"field": null, "list": [null]});
        assert!(resolved(&doc, "$.field").is_absent());
        assert!(resolved(&doc, "$.list[0]").is_absent());
        assert!(resolved(&json!(null), "$").is_absent());
    }

    #[test]
    fn test_walk_through_null_is_absent() {
        let doc = json!({"field": null});
        assert!(resolved(&doc, "$.field.inner").is_absent());
        assert!(resolved(&doc, "$.field[0]").is_absent());
    }

    #[test]
    fn test_index_out_of_range_is_absent() {
        let doc = json!({"items": [1, 2, 3]});
        assert!(resolved(&doc, "$.items[3]").is_absent());
        assert!(resolved(&doc, "$.items[100]").is_absent());
    }

    #[test]
    fn test_wrong_container_is_absent() {
        let doc = json!({"items": [1, 2], "obj": {"0": "zero"}, "text": "abc"});
        assert!(resolved(&doc, "$.items.length").is_absent());
        assert!(resolved(&doc, "$.obj[0]").is_absent());
        assert!(resolved(&doc, "$.text[0]").is_absent());
        assert!(resolved(&doc, "$.text.len").is_absent());
    }

    #[test]
    fn test_falsy_values_are_found() {
        let doc = json!({"f": false, "z": 0, "e": "", "a": [], "o": {}});
        for path in ["$.f", "$.z", "$.e", "$.a", "$.o"] {
            assert!(resolved(&doc, path).is_found(), "{path} should be found");
        }
    }

    #[test]
    fn test_invalid_path_is_error() {
        let err = resolve_str(&json!({}), "$.items[*]").unwrap_err();
        assert!(err.is_invalid_path());
    }
}
