//! Directory walk
//!
//! Visits every file under the root in file-name order, keeps the ones with a
//! configured extension, drops the ignored ones and hands the rest to the
//! marker mutator one at a time.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::backends::filter::{should_ignore, IgnoreSpec};
use crate::core::model::{RunConfig, RunSummary};
use crate::crumbs::mutate::process;

/// Collect candidate files under the root, in walk order
pub fn candidate_files(config: &RunConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let is_candidate = entry
            .file_name()
            .to_str()
            .map(|name| config.is_candidate(name))
            .unwrap_or(false);
        if is_candidate {
            files.push(entry.into_path());
        }
    }

    files
}

/// Mark every candidate file and return the run's counters
///
/// `ignore` is `None` when ignore handling is disabled.
pub fn run_scan(config: &RunConfig, ignore: Option<&IgnoreSpec>) -> RunSummary {
    let mut summary = RunSummary::new(config.dry_run);

    for path in candidate_files(config) {
        if let Some(spec) = ignore {
            if should_ignore(&path, &config.root, spec) {
                debug!(path = %relative_display(&path, &config.root), "skipping, ignore pattern");
                summary.record_ignored();
                continue;
            }
        }

        let outcome = process(&path, config);
        debug!(
            path = %relative_display(&path, &config.root),
            outcome = outcome.label(),
            "processed"
        );
        summary.record(&outcome);
    }

    summary
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
