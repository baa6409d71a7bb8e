//! Golden tests for crumb
//!
//! These tests copy the sample project into a temp directory, run the binary
//! over it and compare the marked files against their expected content.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy the sample project into a fresh temp dir, activating its ignore file
fn sample_project() -> TempDir {
    let temp = tempfile::tempdir().expect("create temp dir");
    copy_dir(&fixtures_dir().join("sample_project"), temp.path());
    fs::rename(temp.path().join("gitignore"), temp.path().join(".gitignore"))
        .expect("activate .gitignore");
    temp
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Create a command for running the crumb binary
fn crumb_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crumb"));
    cmd.env_remove("CRUMB_LOG").env_remove("CRUMB_PATH");
    cmd
}

fn run_json(root: &Path, extra: &[&str]) -> Value {
    let mut cmd = crumb_cmd();
    cmd.arg("--path")
        .arg(root)
        .args(["--format", "json", "--no-color"])
        .args(extra);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    serde_json::from_str(stdout.trim()).expect("summary is valid json")
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_default_run() {
        let project = sample_project();
        let root = project.path();

        let summary = run_json(root, &[]);
        assert_eq!(summary["total"], 5);
        assert_eq!(summary["updated"], 2);
        assert_eq!(summary["skipped"], 3);
        assert_eq!(summary["replaced"], 0);
        assert_eq!(summary["dry_run"], false);

        assert_eq!(
            read(root, "app.py"),
            "#!/usr/bin/env python3\n\
\"\"\"Entry point for the sample project.\"\"\"\n\
# crumb: app.py\n\
import sys\n\
\n\
from pkg.models import Model\n\
\n\
\n\
if __name__ == \"__main__\":\n    sys.exit(Model().run())\n"
        );

        assert_eq!(
            read(root, "pkg/models.py"),
            "# -*- coding: utf-8 -*-\n\
\"\"\"\n\
Data models.\n\
\n\
Kept deliberately small.\n\
\"\"\"\n\
# crumb: pkg/models.py\n\
\n\
\n\
class Model:\n    def run(self):\n        return 0\n"
        );

        // Untouched: already marked, empty, ignored, wrong extension
        assert_eq!(read(root, "pkg/done.py"), "# crumb: pkg/done.py\nDONE = True\n");
        assert_eq!(read(root, "pkg/__init__.py"), "");
        assert_eq!(read(root, "build/gen.py"), "GENERATED = 1\n");
        assert_eq!(read(root, "scripts/tool.js"), "console.log('tool');\n");
    }

    #[test]
    fn golden_second_run_is_noop() {
        let project = sample_project();
        let root = project.path();

        run_json(root, &[]);
        let app_after_first = read(root, "app.py");

        let summary = run_json(root, &[]);
        assert_eq!(summary["updated"], 0);
        assert_eq!(summary["skipped"], 5);
        assert_eq!(read(root, "app.py"), app_after_first);
    }

    #[test]
    fn golden_no_ignore_with_js() {
        let project = sample_project();
        let root = project.path();

        let summary = run_json(root, &["--no-ignore", "--all-ext", "js"]);
        assert_eq!(summary["total"], 6);
        assert_eq!(summary["updated"], 4);

        assert_eq!(
            read(root, "build/gen.py"),
            "# crumb: build/gen.py\nGENERATED = 1\n"
        );
        assert_eq!(
            read(root, "scripts/tool.js"),
            "# crumb: scripts/tool.js\nconsole.log('tool');\n"
        );
    }

    #[test]
    fn golden_replace_rewrites_stale_marker() {
        let project = sample_project();
        let root = project.path();
        fs::write(root.join("pkg/done.py"), "# crumb: old/location.py\nDONE = True\n").unwrap();

        let summary = run_json(root, &["--replace"]);
        assert_eq!(summary["updated"], 3);
        assert_eq!(summary["replaced"], 1);
        assert_eq!(read(root, "pkg/done.py"), "# crumb: pkg/done.py\nDONE = True\n");
    }

    #[test]
    fn golden_dry_run_changes_nothing() {
        let project = sample_project();
        let root = project.path();
        let before = read(root, "app.py");

        let summary = run_json(root, &["--dry-run", "--backup", ".bak"]);
        assert_eq!(summary["updated"], 2);
        assert_eq!(summary["dry_run"], true);
        assert_eq!(read(root, "app.py"), before);
        assert!(!root.join("app.py.bak").exists());
    }
}
