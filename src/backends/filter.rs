//! File selection filter
//!
//! Ignore patterns come from the root's `.gitignore` plus an optional extra
//! file, in that order. With the `gitignore` feature they are compiled into a
//! real gitignore matcher, skipping any line that fails to compile. Without
//! the feature, or when the matcher cannot be built at all, a coarser
//! substring matcher is used:
//! - `dir/` ignores every path starting with `dir`
//! - any other pattern ignores every path containing it

#[cfg(feature = "gitignore")]
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::error::CrumbError;
use crate::core::paths::{make_relative, to_unix_separators};

/// Name of the ignore file read from the scan root
pub const GITIGNORE: &str = ".gitignore";

/// Compiled ignore patterns, immutable for a run
#[derive(Debug, Clone)]
pub enum IgnoreSpec {
    /// Full gitignore semantics
    #[cfg(feature = "gitignore")]
    Glob(Gitignore),
    /// Prefix/substring approximation
    Substring(Vec<String>),
}

impl IgnoreSpec {
    /// Load patterns from `<root>/.gitignore` and an optional extra file
    ///
    /// Missing files contribute no patterns. A missing extra file is worth a
    /// warning since the user named it explicitly.
    pub fn load(root: &Path, extra: Option<&Path>) -> Result<Self, CrumbError> {
        let mut patterns = read_pattern_file(&root.join(GITIGNORE))?;

        if let Some(extra) = extra {
            if extra.is_file() {
                patterns.extend(read_pattern_file(extra)?);
            } else {
                warn!(path = %extra.display(), "ignore file not found, using .gitignore only");
            }
        }

        Ok(Self::from_patterns(root, patterns))
    }

    /// Compile pattern lines with the best matcher available
    pub fn from_patterns<I, S>(root: &Path, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().trim_end_matches(['\r', '\n']).to_string())
            .collect();

        #[cfg(feature = "gitignore")]
        {
            match build_gitignore(root, &patterns) {
                Ok(gitignore) => return IgnoreSpec::Glob(gitignore),
                Err(e) => {
                    warn!("failed to build ignore matcher ({}); ignore handling may be limited", e);
                }
            }
        }

        #[cfg(not(feature = "gitignore"))]
        {
            let _ = root;
            warn!("gitignore support not compiled in; ignore handling may be limited");
        }

        Self::substring(patterns)
    }

    /// Build the substring matcher directly
    pub fn substring<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty() && !p.starts_with('#'))
            .collect();
        IgnoreSpec::Substring(patterns)
    }

    /// Whether a root-relative path is ignored
    fn matches_relative(&self, relative: &Path) -> bool {
        match self {
            #[cfg(feature = "gitignore")]
            IgnoreSpec::Glob(gitignore) => gitignore
                .matched_path_or_any_parents(relative, false)
                .is_ignore(),
            IgnoreSpec::Substring(patterns) => {
                let relative = to_unix_separators(&relative.to_string_lossy());
                patterns.iter().any(|pattern| match pattern.strip_suffix('/') {
                    Some(dir) if relative.starts_with(dir) => true,
                    _ => relative.contains(pattern.as_str()),
                })
            }
        }
    }
}

#[cfg(feature = "gitignore")]
fn build_gitignore(root: &Path, patterns: &[String]) -> Result<Gitignore, ignore::Error> {
    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        if let Err(e) = builder.add_line(None, pattern) {
            warn!(pattern = %pattern, "skipping invalid ignore pattern: {}", e);
        }
    }
    builder.build()
}

fn read_pattern_file(path: &Path) -> Result<Vec<String>, CrumbError> {
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(|source| CrumbError::IgnoreFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Decide whether a candidate file should be skipped
///
/// Candidates outside `root` are never ignored.
pub fn should_ignore(candidate: &Path, root: &Path, spec: &IgnoreSpec) -> bool {
    let relative: PathBuf = if candidate.is_absolute() {
        match make_relative(candidate, root) {
            Some(relative) => relative,
            None => return false,
        }
    } else {
        candidate.to_path_buf()
    };
    spec.matches_relative(&relative)
}
