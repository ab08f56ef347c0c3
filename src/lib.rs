//! Capstan - a build-pipeline task that pushes git repository state to a remote
//!
//! Capstan is a single-binary tool (and library) for the one job release
//! pipelines keep reimplementing: push the local repository state - commits,
//! the current branch or all branches, and optionally tags - to a named
//! remote, with authentication resolved from explicit configuration or an
//! interactive/environment fallback.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the task)
//! - [`task`] - Push task: remote resolution, credential selection, execution
//! - [`transport`] - Push transport abstraction (libgit2 production, mock for tests)
//! - [`git`] - Single interface for repository access
//! - [`auth`] - Interactive/environment credential fallback
//! - [`config`] - Layered TOML configuration
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Capstan maintains the following invariants:
//!
//! 1. A push request is assembled only from fully resolved values
//! 2. Explicit credentials are used only when both username and password are set
//! 3. Deferred remote values are re-evaluated on every task run, never cached
//! 4. Every transport failure surfaces as one uniform error with its cause intact

pub mod auth;
pub mod cli;
pub mod config;
pub mod git;
pub mod task;
pub mod transport;
pub mod ui;
