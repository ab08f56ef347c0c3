//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Capstan - push repository state to a remote from build pipelines
#[derive(Parser, Debug)]
#[command(name = "capstan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if capstan was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Explicit interactive preference from the flags, if any.
    ///
    /// Returns `Some(true)` for `--interactive`, `Some(false)` for
    /// `--no-interactive` or `--quiet`, and `None` when no flag was given
    /// (configuration and TTY detection decide).
    pub fn interactive(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet {
            Some(false)
        } else {
            None
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Push commits, branches, and optionally tags to a remote
    #[command(
        name = "push",
        long_about = "Push local repository state to a remote.\n\n\
            By default the current branch is pushed, non-forced, to the remote \
            named 'origin'. The remote, ref scope, and force behavior come from \
            flags, then the local/project/global config files, then defaults.\n\n\
            Explicit credentials are used only when both a username and a \
            password are configured; anything less falls back to the \
            environment (CAPSTAN_USERNAME / CAPSTAN_PASSWORD) and then to an \
            interactive prompt.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Push the current branch to origin
    capstan push

    # Release: push every branch plus tags
    capstan push --all --tags

    # Push a rewritten branch over the remote one
    capstan push --force

    # See what would be pushed, without touching the network
    capstan push --dry-run

    # Machine-readable plan for pipeline tooling
    capstan push --dry-run --json"
    )]
    Push {
        /// Destination remote name (default: origin)
        #[arg(long)]
        remote: Option<String>,

        /// Include all tags in the push scope
        #[arg(long = "tags")]
        push_tags: bool,

        /// Include all local branches in the push scope
        #[arg(long = "all")]
        push_all: bool,

        /// Allow non-fast-forward updates
        #[arg(long)]
        force: bool,

        /// Username for explicit authentication
        #[arg(long)]
        username: Option<String>,

        /// Password for explicit authentication
        #[arg(long)]
        password: Option<String>,

        /// Print the resolved push plan without pushing
        #[arg(long)]
        dry_run: bool,

        /// Render the dry-run plan as JSON
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn quiet_implies_non_interactive() {
        let cli = Cli::parse_from(["capstan", "--quiet", "push"]);
        assert_eq!(cli.interactive(), Some(false));
    }

    #[test]
    fn interactive_flag_wins() {
        let cli = Cli::parse_from(["capstan", "--interactive", "push"]);
        assert_eq!(cli.interactive(), Some(true));
    }

    #[test]
    fn no_flag_leaves_preference_open() {
        let cli = Cli::parse_from(["capstan", "push"]);
        assert_eq!(cli.interactive(), None);
    }

    #[test]
    fn json_requires_dry_run() {
        let result = Cli::try_parse_from(["capstan", "push", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn completion_accepts_known_shells() {
        let cli = Cli::parse_from(["capstan", "completion", "zsh"]);
        assert!(matches!(
            cli.command,
            Command::Completion {
                shell: clap_complete::Shell::Zsh
            }
        ));
        assert!(Cli::try_parse_from(["capstan", "completion", "tcsh"]).is_err());
    }
}
