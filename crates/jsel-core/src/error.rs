//! # Error Types — One Selection Error
//!
//! Every failure in the selection layer surfaces as [`JsonSelectionError`].
//! Callers only ever need to handle that one type; the variants keep the
//! causes apart for debugging and for tests.
//!
//! ## Design
//!
//! - `Missing` and `KindMismatch` are structural: the path did not lead to
//!   a usable node of the right shape.
//! - `Conversion` is value-level: the node had the right kind but its
//!   content could not become the target type. The lower-level failure is
//!   kept as the error `source()`.
//! - `InvalidPath` and `Parse` are caller errors raised before any
//!   navigation happens.

use thiserror::Error;

use crate::kind::{JsonKind, KindSet};

/// The single error type of the selection layer.
#[derive(Error, Debug)]
pub enum JsonSelectionError {
    /// A required selection resolved to nothing (missing key, index out of
    /// range, or a `null` literal).
    #[error("selection missing at {path}")]
    Missing {
        /// Path that was selected.
        path: String,
    },

    /// The node was found but its kind is not one the accessor accepts.
    #[error("unexpected kind at {path}: {actual} (expected one of {expected})")]
    KindMismatch {
        /// Path that was selected.
        path: String,
        /// Kind of the node that was found.
        actual: JsonKind,
        /// Kinds the accessor accepts.
        expected: KindSet,
    },

    /// The node kind matched but its content did not convert.
    #[error("failed to convert value at {path} to {target}: {source}")]
    Conversion {
        /// Path that was selected.
        path: String,
        /// Name of the target type (e.g. `uuid`, `datetime`, `i32`).
        target: &'static str,
        /// Underlying conversion failure.
        #[source]
        source: ConversionError,
    },

    /// The path string does not follow the supported grammar.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// Path text as given by the caller.
        path: String,
        /// What the parser rejected.
        reason: String,
    },

    /// Raw JSON text could not be parsed into a document.
    #[error("invalid JSON document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl JsonSelectionError {
    /// Returns the path involved in the failure, if any.
    ///
    /// `Parse` failures happen before a path is looked at and return `None`.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Missing { path }
            | Self::KindMismatch { path, .. }
            | Self::Conversion { path, .. }
            | Self::InvalidPath { path, .. } => Some(path),
            Self::Parse(_) => None,
        }
    }

    /// True for [`JsonSelectionError::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// True for [`JsonSelectionError::KindMismatch`].
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, Self::KindMismatch { .. })
    }

    /// True for [`JsonSelectionError::Conversion`].
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }

    /// True for [`JsonSelectionError::InvalidPath`].
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure converting a node of the right kind into the target type.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Text is not a UUID literal.
    #[error("invalid uuid: {0}")]
    Uuid(#[from] uuid::Error),

    /// Text does not match the expected date/time layout.
    #[error("invalid date/time {text:?}: {source}")]
    DateTime {
        /// The text that was parsed.
        text: String,
        /// Underlying chrono failure.
        #[source]
        source: chrono::ParseError,
    },

    /// A caller-supplied date/time format string cannot be used.
    #[error("unsupported date/time format {format:?}: {reason}")]
    DateFormat {
        /// The format string as given.
        format: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A number does not fit the target numeric type.
    #[error("{value} is out of range for {target}")]
    OutOfRange {
        /// The number as it appeared in the document.
        value: String,
        /// Name of the target numeric type.
        target: &'static str,
    },

    /// An array element failed to convert.
    #[error("element {index}: {source}")]
    Element {
        /// Position of the element in the array.
        index: usize,
        /// The element's own conversion failure.
        #[source]
        source: Box<ConversionError>,
    },

    /// A nested value has a kind the target type does not accept.
    #[error("unexpected kind {actual} (expected one of {expected})")]
    Kind {
        /// Kind of the nested value.
        actual: JsonKind,
        /// Kinds the target type accepts.
        expected: KindSet,
    },
}

impl ConversionError {
    /// Attach an array position to an element-level failure.
    pub fn at_index(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }
}
