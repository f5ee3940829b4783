//! Core data types for pdeps.
//!
//! This crate defines the values produced while reading a `product_deps`
//! file: normalized qualifier sets, dependency records with their
//! qualifier resolution state, the resolution result, and the optional
//! user configuration.
//!
//! This crate is intentionally free of parsing logic; see `pdeps-resolver`.

/// Column value marking a package as unused for a qualifier row.
pub const UNUSED_MARKER: &str = "-";

/// Column value marking a package as used without qualifiers.
pub const NO_QUALIFIERS_MARKER: &str = "-nq-";

pub mod config;
pub mod dependency;
pub mod qualifier;
