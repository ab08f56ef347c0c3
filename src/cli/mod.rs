//! cli
//!
//! Command-line interface layer for Capstan.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT perform repository access directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the [`crate::task`] layer for execution. All repository access flows
//! through [`crate::git`] and the push transport.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;
use std::path::PathBuf;

/// Context assembled from global CLI flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory to run in (defaults to the current directory).
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
    /// Explicit interactive preference from flags, if any.
    pub interactive: Option<bool>,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
