//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::backends::filter::IgnoreSpec;
use crate::backends::scan::run_scan;
use crate::core::error::CrumbError;
use crate::core::logging;
use crate::core::model::{PathBase, PathStyle, RunConfig};
use crate::core::render::{RenderConfig, Renderer};

/// crumb - recursively insert a '# crumb:' comment into files that don't already have it.
#[derive(Parser, Debug)]
#[command(name = "crumb")]
#[command(
    author,
    version,
    about,
    long_about = r#"crumb walks a directory tree and inserts a single breadcrumb line

    # crumb: <path>

into every matching file that lacks one. The marker goes after any shebang,
encoding declaration and leading docstring, before the first real line.

Files matched by .gitignore (and an optional extra ignore file) are skipped.
Only .py files are processed unless --all-ext adds more extensions.

Examples:
    crumb --dry-run
    crumb -p src --backup .bak
    crumb --all-ext .js --all-ext .ts --unix
    crumb --replace --absolute
"#
)]
pub struct Cli {
    /// Starting directory (defaults to the current directory).
    #[arg(
        short,
        long,
        env = "CRUMB_PATH",
        default_value = ".",
        value_name = "DIR",
        long_help = "Starting directory for the walk (defaults to the current directory).\n\n\
Relative marker paths are computed against this directory."
    )]
    pub path: PathBuf,

    /// Do not modify any files; just report what would be done.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging.
    #[arg(
        short,
        long,
        long_help = "Log every per-file decision (insert, replace, skip reason) to stderr.\n\n\
The CRUMB_LOG environment variable overrides the log filter entirely."
    )]
    pub verbose: bool,

    /// Backup files with the given extension before modifying (e.g. '.bak').
    #[arg(
        long,
        value_name = "EXT",
        long_help = "Copy each file to <file><EXT> before it is modified.\n\n\
Example: --backup .orig turns app.py into app.py.orig. No backups are made on a dry run."
    )]
    pub backup: Option<String>,

    /// Extra ignore-pattern file, read in addition to .gitignore.
    #[arg(long, value_name = "FILE", conflicts_with = "no_ignore")]
    pub ignore: Option<PathBuf>,

    /// Ignore .gitignore (and any other ignore file) completely.
    #[arg(long)]
    pub no_ignore: bool,

    /// Process files with this extension in addition to .py (repeatable).
    #[arg(
        long = "all-ext",
        value_name = "EXT",
        long_help = "Also process files ending in EXT. May be given multiple times.\n\n\
The leading dot is optional: --all-ext js and --all-ext .js are equivalent."
    )]
    pub all_ext: Vec<String>,

    /// Embed absolute paths instead of paths relative to the start directory.
    #[arg(long)]
    pub absolute: bool,

    /// Replace existing '# crumb:' markers with the current path.
    #[arg(long)]
    pub replace: bool,

    /// Use '/' as the path separator in markers, whatever the platform.
    #[arg(long)]
    pub unix: bool,

    /// Summary format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "FORMAT"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Resolve the parsed arguments into a run configuration
    pub fn to_config(&self) -> Result<RunConfig, CrumbError> {
        let root = self
            .path
            .canonicalize()
            .map_err(|_| CrumbError::InvalidRoot(self.path.clone()))?;
        if !root.is_dir() {
            return Err(CrumbError::InvalidRoot(self.path.clone()));
        }

        let mut config = RunConfig::new(root).with_extensions(&self.all_ext);
        config.dry_run = self.dry_run;
        config.verbose = self.verbose;
        config.backup_ext = self.backup.clone().filter(|ext| !ext.is_empty());
        config.replace = self.replace;
        config.path_style = PathStyle {
            base: if self.absolute {
                PathBase::Absolute
            } else {
                PathBase::Relative
            },
            unix_separators: self.unix,
        };

        Ok(config)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config()?;
    logging::init(config.verbose, !cli.no_color);

    let ignore = if cli.no_ignore {
        None
    } else {
        Some(
            IgnoreSpec::load(&config.root, cli.ignore.as_deref())
                .context("Failed to load ignore patterns")?,
        )
    };

    let summary = run_scan(&config, ignore.as_ref());

    let render_config = RenderConfig {
        format: cli.format.parse().unwrap_or_default(),
        color: !cli.no_color,
        show_replaced: config.replace,
    };
    println!("{}", Renderer::with_config(render_config).render(&summary));

    Ok(())
}
