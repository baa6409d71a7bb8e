//! Backends module - File selection and traversal
//!
//! Provides:
//! - filter: ignore-pattern matching
//! - scan: directory walk driving the marker mutator

pub mod filter;
pub mod scan;
