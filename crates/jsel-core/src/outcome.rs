//! # Selection Outcomes
//!
//! `SelectionOutcome` is the tagged result every accessor computes first.
//! The two calling conventions are thin adapters over it:
//!
//! | Outcome | `into_option` (maybe-form) | `into_required` (required-form) |
//! |---|---|---|
//! | `Found(v)` | `Ok(Some(v))` | `Ok(v)` |
//! | `Absent` | `Ok(None)` | `Err(Missing)` |
//! | `TypeMismatch` | `Err(KindMismatch)` | `Err(KindMismatch)` |
//!
//! `Absent` covers both a path that does not resolve and a path that
//! resolves to the `null` literal. The two are indistinguishable to every
//! consumer of this crate.

use crate::error::JsonSelectionError;
use crate::kind::{JsonKind, KindSet};

/// Result of resolving a path and checking the node's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome<T> {
    /// The node exists, is not `null`, and has an accepted kind.
    Found(T),
    /// The path did not resolve, or resolved to `null`.
    Absent,
    /// The node exists but its kind is not accepted.
    TypeMismatch {
        /// Kind of the node that was found.
        actual: JsonKind,
        /// Kinds that were accepted.
        expected: KindSet,
    },
}

impl<T> SelectionOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns the found value, discarding the other outcomes.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Transform the found value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SelectionOutcome<U> {
        match self {
            Self::Found(value) => SelectionOutcome::Found(f(value)),
            Self::Absent => SelectionOutcome::Absent,
            Self::TypeMismatch { actual, expected } => {
                SelectionOutcome::TypeMismatch { actual, expected }
            }
        }
    }

    /// Maybe-form adapter: absence becomes `None`, a kind mismatch is an
    /// error.
    pub fn into_option(self, path: &str) -> Result<Option<T>, JsonSelectionError> {
        match self {
            Self::Found(value) => Ok(Some(value)),
            Self::Absent => Ok(None),
            Self::TypeMismatch { actual, expected } => Err(JsonSelectionError::KindMismatch {
                path: path.to_string(),
                actual,
                expected,
            }),
        }
    }

    /// Required-form adapter: absence and kind mismatch are both errors.
    pub fn into_required(self, path: &str) -> Result<T, JsonSelectionError> {
        self.into_option(path)?
            .ok_or_else(|| JsonSelectionError::Missing {
                path: path.to_string(),
            })
    }
}

/// Required-form adapter for values already passed through the maybe-form.
///
/// Used by accessors whose maybe-form does more than a kind check (date and
/// UUID parsing, numeric range checks), so the required form fails exactly
/// when the maybe-form returns `None`.
pub fn require<T>(value: Option<T>, path: &str) -> Result<T, JsonSelectionError> {
    value.ok_or_else(|| JsonSelectionError::Missing {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch() -> SelectionOutcome<u8> {
        SelectionOutcome::TypeMismatch {
            actual: JsonKind::Boolean,
            expected: KindSet::single(JsonKind::String),
        }
    }

    #[test]
    fn test_found_adapters() {
        assert_eq!(SelectionOutcome::Found(7).into_option("$.a").unwrap(), Some(7));
        assert_eq!(SelectionOutcome::Found(7).into_required("$.a").unwrap(), 7);
    }

    #[test]
    fn test_absent_adapters() {
        let outcome: SelectionOutcome<u8> = SelectionOutcome::Absent;
        assert_eq!(outcome.into_option("$.a").unwrap(), None);
        let err = outcome.into_required("$.a").unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.path(), Some("$.a"));
    }

    #[test]
    fn test_mismatch_fails_both_forms() {
        assert!(mismatch().into_option("$.a").unwrap_err().is_kind_mismatch());
        assert!(mismatch().into_required("$.a").unwrap_err().is_kind_mismatch());
    }

    #[test]
    fn test_map_keeps_tag() {
        assert_eq!(SelectionOutcome::Found(2).map(|v| v * 2), SelectionOutcome::Found(4));
        assert!(SelectionOutcome::<u8>::Absent.map(|v| v * 2).is_absent());
        assert!(mismatch().map(|v| v * 2).is_mismatch());
    }

    #[test]
    fn test_found_discards_other_outcomes() {
        assert_eq!(SelectionOutcome::Found(1).found(), Some(1));
        assert_eq!(mismatch().found(), None);
    }

    #[test]
    fn test_require_helper() {
        assert_eq!(require(Some(3), "$.a").unwrap(), 3);
        assert!(require::<u8>(None, "$.a").unwrap_err().is_missing());
    }
}
