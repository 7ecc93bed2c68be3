//! # Shape-Checked Retrieval
//!
//! The single validation rule behind every typed accessor: resolve the
//! path, then require the node's [`JsonKind`] to be in the accepted
//! [`KindSet`].

use jsel_core::{resolve, JsonKind, JsonSelectionError, KindSet, PathExpression, SelectionOutcome};
use serde_json::Value;

/// Resolve `path` and check the node's kind against `expected`.
///
/// Returns `Absent` when the path does not resolve or resolves to `null`,
/// `TypeMismatch` when the node's kind is not in `expected`, and `Found`
/// otherwise.
///
/// # Errors
///
/// Returns [`JsonSelectionError::InvalidPath`] if `path` does not parse.
pub fn select_checked<'a>(
    root: &'a Value,
    path: &str,
    expected: KindSet,
) -> Result<SelectionOutcome<&'a Value>, JsonSelectionError> {
    let expression = PathExpression::parse(path)?;
    Ok(check_kind(resolve(root, &expression), expected))
}

/// Select the raw node at `path` if its kind is in `expected`.
///
/// `Ok(None)` when absent or `null`; a kind outside `expected` is an error.
pub fn select_token<'a>(
    root: &'a Value,
    path: &str,
    expected: KindSet,
) -> Result<Option<&'a Value>, JsonSelectionError> {
    select_checked(root, path, expected)?.into_option(path)
}

/// Like [`select_token`], but absence is an error too.
pub fn require_token<'a>(
    root: &'a Value,
    path: &str,
    expected: KindSet,
) -> Result<&'a Value, JsonSelectionError> {
    select_checked(root, path, expected)?.into_required(path)
}

fn check_kind(outcome: SelectionOutcome<&Value>, expected: KindSet) -> SelectionOutcome<&Value> {
    match outcome {
        SelectionOutcome::Found(node) => {
            let actual = JsonKind::of(node);
            if expected.contains(actual) {
                SelectionOutcome::Found(node)
            } else {
                SelectionOutcome::TypeMismatch { actual, expected }
            }
        }
        other => other,
    }
}
