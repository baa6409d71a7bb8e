//! Core module - Shared types and plumbing
//!
//! This module provides:
//! - Run configuration, outcomes and summary counters
//! - Error types
//! - Source file reading, writing and backups
//! - Marker path rendering
//! - Logging setup and summary rendering

pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
