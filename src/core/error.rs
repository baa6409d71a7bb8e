//! Error types for crumb
//!
//! Per-file variants never escape a single file's processing; the marker
//! mutator maps them onto skip outcomes. Only `InvalidRoot` aborts a run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while marking files
#[derive(Error, Debug)]
pub enum CrumbError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("failed to decode file '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// File content looks binary (contains NUL bytes)
    #[error("file '{0}' appears to be binary")]
    Binary(PathBuf),

    /// Failed to copy the original file aside
    #[error("failed to create backup '{backup}' for '{path}': {source}")]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        source: std::io::Error,
    },

    /// Failed to persist the mutated content
    #[error("failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read an ignore-pattern file
    #[error("failed to read ignore file '{path}': {source}")]
    IgnoreFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Scan root does not exist or is not a directory
    #[error("invalid root directory: {0}")]
    InvalidRoot(PathBuf),
}

impl CrumbError {
    /// Short machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            CrumbError::Read { .. } => "READ_FAILURE",
            CrumbError::Decode { .. } => "DECODE_FAILURE",
            CrumbError::Binary(_) => "BINARY_FILE",
            CrumbError::Backup { .. } => "BACKUP_FAILURE",
            CrumbError::Write { .. } => "WRITE_FAILURE",
            CrumbError::IgnoreFile { .. } => "IGNORE_FILE",
            CrumbError::InvalidRoot(_) => "INVALID_ROOT",
        }
    }
}
