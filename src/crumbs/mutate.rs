//! Marker mutation
//!
//! Reads one file, asks the analyzer where its breadcrumb belongs, and writes
//! the file back with exactly one line inserted or replaced. Every failure is
//! logged and reported as a skip; nothing escapes a single file.

use std::path::Path;
use tracing::{debug, error, info};

use crate::core::error::CrumbError;
use crate::core::file_reader::{create_backup, read_source_file, write_source_file, SourceFile};
use crate::core::model::{Mutation, Outcome, RunConfig};
use crate::core::paths::marker_path;
use crate::crumbs::analyze::{analyze, marker_line, Placement};

/// Process one candidate file
pub fn process(path: &Path, config: &RunConfig) -> Outcome {
    let embedded = marker_path(path, &config.root, config.path_style);

    let mut source = match read_source_file(path) {
        Ok(source) => source,
        Err(e) => {
            error!(code = e.code(), "{}", e);
            return Outcome::SkippedReadError;
        }
    };

    if source.is_empty() {
        debug!(path = %path.display(), "skipping empty file");
        return Outcome::SkippedEmpty;
    }

    let mutation = match analyze(source.lines(), config.replace) {
        Placement::SkipExisting => {
            debug!(path = %path.display(), "skipping, marker already present");
            return Outcome::SkippedAlreadyPresent;
        }
        Placement::ReplaceAt(index) => Mutation::Replaced(index),
        Placement::InsertAt(index) => Mutation::Inserted(index),
    };

    let line = marker_line(&embedded);
    match mutation {
        Mutation::Inserted(index) => debug!(
            path = %path.display(),
            line = index,
            dry_run = config.dry_run,
            "inserting marker"
        ),
        Mutation::Replaced(index) => debug!(
            path = %path.display(),
            line = index,
            dry_run = config.dry_run,
            "replacing marker"
        ),
    }

    if config.dry_run {
        return Outcome::Modified(mutation);
    }

    match apply(path, &mut source, mutation, line, config.backup_ext.as_deref()) {
        Ok(()) => Outcome::Modified(mutation),
        Err(e) => {
            error!(code = e.code(), "{}", e);
            Outcome::SkippedWriteError
        }
    }
}

/// Back up if requested, mutate the lines and persist them
fn apply(
    path: &Path,
    source: &mut SourceFile,
    mutation: Mutation,
    line: String,
    backup_ext: Option<&str>,
) -> Result<(), CrumbError> {
    if let Some(ext) = backup_ext {
        let backup = create_backup(path, ext)?;
        info!(backup = %backup.display(), "created backup");
    }

    match mutation {
        Mutation::Inserted(index) => source.insert(index, line),
        Mutation::Replaced(index) => source.replace(index, line),
    }

    write_source_file(path, source)
}
