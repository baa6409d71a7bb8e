//! Run model
//!
//! The resolved configuration for one invocation, the per-file outcome of the
//! marker mutator, and the summary counters the walk driver accumulates.

use serde::Serialize;
use std::path::PathBuf;

/// Extension every run processes
pub const DEFAULT_EXTENSION: &str = ".py";

/// Which base the embedded path is expressed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathBase {
    /// Relative to the scan root
    #[default]
    Relative,
    /// Resolved absolute path of the file
    Absolute,
}

/// How the embedded marker path is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathStyle {
    pub base: PathBase,
    /// Rewrite native separators to '/'
    pub unix_separators: bool,
}

/// Resolved options for one run. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Absolute scan root
    pub root: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
    /// Suffix appended to the original file name for backups (e.g. ".bak")
    pub backup_ext: Option<String>,
    pub path_style: PathStyle,
    /// Overwrite existing markers instead of skipping the file
    pub replace: bool,
    /// File name suffixes that make a file a candidate, each with a leading '.'
    pub extensions: Vec<String>,
}

impl RunConfig {
    /// Create a config with default options for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
            verbose: false,
            backup_ext: None,
            path_style: PathStyle::default(),
            replace: false,
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    /// Add extra extensions on top of the default one
    pub fn with_extensions<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extra {
            let ext = normalize_extension(ext.as_ref());
            if !ext.is_empty() && !self.extensions.contains(&ext) {
                self.extensions.push(ext);
            }
        }
        self
    }

    /// Whether a file name carries one of the configured extensions
    pub fn is_candidate(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Normalize "js" and ".js" to ".js"
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return String::new();
    }
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// What happened to the marker line of a modified file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// New marker inserted at this line index
    Inserted(usize),
    /// Existing marker at this line index overwritten
    Replaced(usize),
}

/// Per-file result of the marker mutator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Written, or would be written on a dry run
    Modified(Mutation),
    SkippedEmpty,
    SkippedAlreadyPresent,
    SkippedReadError,
    SkippedWriteError,
}

impl Outcome {
    #[cfg(test)]
    pub fn is_modified(&self) -> bool {
        matches!(self, Outcome::Modified(_))
    }

    /// Short label used in verbose logs
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Modified(Mutation::Inserted(_)) => "inserted",
            Outcome::Modified(Mutation::Replaced(_)) => "replaced",
            Outcome::SkippedEmpty => "empty file",
            Outcome::SkippedAlreadyPresent => "marker already present",
            Outcome::SkippedReadError => "read failure",
            Outcome::SkippedWriteError => "write failure",
        }
    }
}

/// Counters accumulated across one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Candidate files considered (ignored ones included)
    pub total: usize,
    pub updated: usize,
    pub skipped: usize,
    /// Updates that overwrote an existing marker
    pub replaced: usize,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Count a candidate rejected by the ignore filter
    pub fn record_ignored(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    /// Count a candidate handed to the marker mutator
    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Modified(mutation) => {
                self.updated += 1;
                if matches!(mutation, Mutation::Replaced(_)) {
                    self.replaced += 1;
                }
            }
            _ => self.skipped += 1,
        }
    }
}
