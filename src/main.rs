//! crumb - Insert a `# crumb: <path>` breadcrumb into source files
//!
//! crumb walks a directory tree and, for every matching file without one,
//! places a single marker line naming the file's own path just after any
//! shebang, encoding declaration and module docstring.

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod crumbs;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
