//! Insertion-point analysis
//!
//! Decides where a file's breadcrumb belongs: after a shebang, an encoding
//! declaration and a leading docstring, before the first real line. One
//! forward pass, no backtracking.

use once_cell::sync::Lazy;
use regex::Regex;

/// Detection key for an existing breadcrumb
pub const MARKER_KEY: &str = "# crumb:";

/// Prefix of an encoding declaration line
const CODING_PREFIX: &str = "# -*- coding:";

/// Opening of a docstring: three identical quote characters
static DOCSTRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*("""|''')"#).expect("Invalid DOCSTRING_RE regex"));

/// Build the marker line for a path, terminator included
pub fn marker_line(path: &str) -> String {
    format!("{} {}\n", MARKER_KEY, path)
}

/// Where, if anywhere, the marker goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A marker exists and must be left alone
    SkipExisting,
    /// Overwrite the existing marker at this index
    ReplaceAt(usize),
    /// Insert a new marker at this index
    InsertAt(usize),
}

/// Find the placement of the marker within `lines`
///
/// The returned insert index is always within `0..=lines.len()`.
pub fn analyze<S: AsRef<str>>(lines: &[S], replace: bool) -> Placement {
    let mut insertion_index = 0;
    let mut docstring_delim: Option<&str> = None;

    for (i, line) in lines.iter().enumerate() {
        let stripped = line.as_ref().trim();

        if stripped.contains(MARKER_KEY) {
            return if replace {
                Placement::ReplaceAt(i)
            } else {
                Placement::SkipExisting
            };
        }

        if i == 0 && stripped.starts_with("#!") {
            insertion_index = i + 1;
            continue;
        }

        if i <= 1 && stripped.starts_with(CODING_PREFIX) {
            insertion_index = i + 1;
            continue;
        }

        match docstring_delim {
            None => match DOCSTRING_RE.captures(stripped).and_then(|caps| caps.get(1)) {
                Some(open) => {
                    let delim = open.as_str();
                    let single_line = stripped.len() > delim.len()
                        && stripped.starts_with(delim)
                        && stripped.ends_with(delim);
                    if !single_line {
                        docstring_delim = Some(delim);
                    }
                    insertion_index = i + 1;
                }
                None => {
                    insertion_index = i;
                    break;
                }
            },
            Some(delim) => {
                if stripped.ends_with(delim) {
                    docstring_delim = None;
                    insertion_index = i + 1;
                }
            }
        }
    }

    Placement::InsertAt(insertion_index)
}
