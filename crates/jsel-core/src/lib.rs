//! # jsel-core — Foundational Types for Typed JSON Selection
//!
//! This crate is the leaf of the `jsel` workspace. It defines the
//! vocabulary every typed accessor is written in, and the resolver they
//! all navigate with. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One kind taxonomy.** `JsonKind` classifies every node; every shape
//!    check is "is the node's kind in this `KindSet`". `12` and `12.0` are
//!    different kinds.
//!
//! 2. **Resolution has no type opinion.** [`resolve()`] yields `Found` or
//!    `Absent` only. Kind checks happen one layer up, in `jsel-select`.
//!
//! 3. **Null is absence.** A path that resolves to the `null` literal is
//!    `Absent`, exactly like a missing key or an out-of-range index.
//!
//! 4. **Results first, failures second.** Every accessor computes a
//!    `SelectionOutcome` and then adapts it with
//!    [`SelectionOutcome::into_option`] or
//!    [`SelectionOutcome::into_required`]. There is no second code path.
//!
//! 5. **One error type.** [`JsonSelectionError`] covers missing selections,
//!    kind mismatches, value conversion failures, invalid paths and invalid
//!    JSON text.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsel-*` crates.
//! - No `unsafe` code, no I/O, no logging, no shared mutable state.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod outcome;
pub mod path;
pub mod resolve;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{ConversionError, JsonSelectionError};
pub use kind::{JsonKind, KindSet, UnknownKindError, JSON_KIND_COUNT};
pub use outcome::{require, SelectionOutcome};
pub use path::{PathExpression, Segment};
pub use resolve::{resolve, resolve_str};
pub use temporal::JsonDateTime;
