//! # jsel-select — Typed JSON Selectors
//!
//! Shape-checked retrieval over a `serde_json::Value`. Every accessor
//! follows the same three steps:
//!
//! 1. Parse the path (`$`, `.name`, `[index]`) and resolve it with
//!    [`jsel_core::resolve()`].
//! 2. Check the node's [`JsonKind`](jsel_core::JsonKind) against the
//!    kinds the accessor accepts ([`select_checked`]).
//! 3. Convert the node into the target type ([`FromJsonElement`]).
//!
//! ## Accessor Families
//!
//! - **Scalars** (`scalar.rs`): strings, booleans, `i64`/`i32`,
//!   `f64`/`f32`.
//! - **Collections** (`collection.rs`): homogeneous lists and object
//!   sub-trees.
//! - **Date/time** (`temporal.rs`): pinned ISO-8601 and explicit formats.
//! - **Identity** (`identity.rs`): UUIDs.
//! - **Raw tokens** (`checked.rs`): the node itself, for any requested
//!   kind set.
//!
//! Each family has a maybe-form `select_*` returning `Ok(None)` for an
//! absent or `null` node, and a required-form `require_*` that turns that
//! `None` into [`JsonSelectionError::Missing`](jsel_core::JsonSelectionError::Missing).
//! Both forms fail on a kind mismatch and on content that does not
//! convert.
//!
//! ## Views
//!
//! [`Selector`] binds the accessors to one borrowed tree. [`Document`]
//! owns a tree parsed from text.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsel-core` among workspace crates.
//! - No I/O, no logging, no shared mutable state.

pub mod checked;
pub mod collection;
pub mod document;
pub mod element;
pub mod identity;
pub mod scalar;
pub mod selector;
pub mod temporal;

pub use checked::{require_token, select_checked, select_token};
pub use collection::{require_list, require_object, select_list, select_object};
pub use document::Document;
pub use element::FromJsonElement;
pub use identity::{require_uuid, select_uuid};
pub use scalar::{
    require_as, require_bool, require_f32, require_f64, require_i32, require_i64, require_str,
    require_string, select_as, select_bool, select_f32, select_f64, select_i32, select_i64,
    select_str, select_string,
};
pub use selector::Selector;
pub use temporal::{
    require_datetime, require_datetime_with_format, select_datetime, select_datetime_with_format,
};

pub use jsel_core::{JsonDateTime, JsonKind, JsonSelectionError, KindSet, SelectionOutcome};
