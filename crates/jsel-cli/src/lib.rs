//! # jsel-cli — Typed JSON Selection from the Command Line
//!
//! Provides the `jsel` binary, a thin shell over `jsel-select`.
//!
//! ## Subcommands
//!
//! - `jsel select` — Resolve a path and print the value as a given type.
//!
//! ```bash
//! jsel select --file order.json --path '$.customer.name' --as string
//! jsel select --path '$.tags' --as list-string --optional < order.json
//! ```
//!
//! Exit code 0 on success, 1 on any failure. Diagnostics go to stderr via
//! `tracing`; `RUST_LOG` overrides the `-v` level.

pub mod select;
