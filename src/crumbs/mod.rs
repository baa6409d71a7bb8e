//! Crumbs module - Place breadcrumb markers in files
//!
//! A breadcrumb is a single line `# crumb: <path>` naming the file it lives in.

pub mod analyze;
pub mod mutate;
