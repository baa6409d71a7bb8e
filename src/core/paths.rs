//! Path rendering for marker lines
//!
//! Paths keep the platform separator unless unix-style output is requested.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::core::model::{PathBase, PathStyle};

/// Rewrite native separators to '/'
pub fn to_unix_separators(path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(MAIN_SEPARATOR, "/")
    }
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

/// Resolve a path to its absolute form, following symlinks when possible
pub fn absolute_path(path: &Path, root: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

/// Render the path embedded in a file's marker line
///
/// Falls back to the absolute path when a relative path is requested for a
/// file that does not live under `root`.
pub fn marker_path(path: &Path, root: &Path, style: PathStyle) -> String {
    let rendered = match style.base {
        PathBase::Absolute => absolute_path(path, root),
        PathBase::Relative => match make_relative(path, root) {
            Some(relative) => relative,
            None => {
                tracing::debug!(
                    path = %path.display(),
                    root = %root.display(),
                    "file is outside the root, embedding absolute path"
                );
                absolute_path(path, root)
            }
        },
    };

    let rendered = rendered.to_string_lossy();
    if style.unix_separators {
        to_unix_separators(&rendered)
    } else {
        rendered.into_owned()
    }
}
