//! completion command - Generate shell completion scripts
//!
//! `clap_complete::Shell` doubles as the `ValueEnum` for the CLI argument
//! and the generator, so one `generate` call covers every shell.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

/// Generate a completion script for `shell` on stdout.
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
