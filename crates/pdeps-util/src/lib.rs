//! Shared utilities for pdeps.
//!
//! This crate provides the cross-cutting concerns used by the other pdeps
//! crates: the unified error type and helpers for reading input files.

pub mod errors;
pub mod fs;
