//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Builds and runs the task
//! 3. Formats and displays output
//!
//! Handlers do NOT talk to git2 directly; repository access goes through
//! [`crate::git`] and the push transport.

mod completion;
mod push;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use push::push;

use super::args::Command;
use super::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Push {
            remote,
            push_tags,
            push_all,
            force,
            username,
            password,
            dry_run,
            json,
        } => push::push(
            ctx,
            push::PushArgs {
                remote,
                push_tags,
                push_all,
                force,
                username,
                password,
                dry_run,
                json,
            },
        ),
        Command::Completion { shell } => completion::completion(shell),
    }
}
