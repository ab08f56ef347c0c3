//! git
//!
//! Single interface for repository access.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to the repository. All repository
//! reads flow through this interface; the only other module allowed to
//! touch `git2` is [`crate::transport`], which borrows the raw handle for
//! the push itself.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening (bare repositories allowed - release
//!   pipelines commonly push from mirrors)
//! - Current-branch lookup for default push scope
//! - Remote URL lookup for credential prompts
//!
//! # Example
//!
//! ```ignore
//! use capstan::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let branch = git.current_branch()?;
//! println!("would push {}", branch);
//! ```

mod interface;

pub use interface::{Git, GitError};
