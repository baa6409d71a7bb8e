//! Source file reading and writing
//!
//! A file is held as an ordered list of lines, each keeping its own line
//! terminator, so writing the lines back reproduces the original bytes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::CrumbError;

/// Number of leading bytes inspected for NUL when sniffing binary content
const BINARY_SNIFF_LEN: usize = 8192;

/// The lines of one file, terminators included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    lines: Vec<String>,
}

impl SourceFile {
    /// Split content into lines, keeping each '\n'
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Insert a line at `index`, shifting later lines down by one
    ///
    /// When the line before `index` is the unterminated last line of the
    /// file, it gets a '\n' so the inserted line stays on its own.
    pub fn insert(&mut self, index: usize, line: String) {
        let index = index.min(self.lines.len());
        if index > 0 {
            let previous = &mut self.lines[index - 1];
            if !previous.ends_with('\n') {
                previous.push('\n');
            }
        }
        self.lines.insert(index, line);
    }

    /// Overwrite the line at `index`; out-of-range indices are ignored
    pub fn replace(&mut self, index: usize, line: String) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line;
        }
    }

    pub fn to_content(&self) -> String {
        self.lines.concat()
    }
}

/// Read a file as strict UTF-8 lines
pub fn read_source_file(path: &Path) -> Result<SourceFile, CrumbError> {
    let bytes = fs::read(path).map_err(|source| CrumbError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let check_len = std::cmp::min(BINARY_SNIFF_LEN, bytes.len());
    if bytes[..check_len].contains(&0) {
        return Err(CrumbError::Binary(path.to_path_buf()));
    }

    let content = String::from_utf8(bytes).map_err(|source| CrumbError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(SourceFile::from_content(&content))
}

/// Write lines back to a file, replacing its content
pub fn write_source_file(path: &Path, source: &SourceFile) -> Result<(), CrumbError> {
    fs::write(path, source.to_content()).map_err(|e| CrumbError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Path of the backup copy: the original file name with `ext` appended
pub fn backup_path(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(ext);
    PathBuf::from(name)
}

/// Copy the original file next to itself before it is mutated
pub fn create_backup(path: &Path, ext: &str) -> Result<PathBuf, CrumbError> {
    let backup = backup_path(path, ext);
    fs::copy(path, &backup).map_err(|source| CrumbError::Backup {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;
    Ok(backup)
}
