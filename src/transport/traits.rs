//! transport::traits
//!
//! Transport trait definition and the push request value object.
//!
//! # Design
//!
//! The `Transport` trait is synchronous: the push blocks the calling
//! thread until the network round-trip completes or fails. All methods
//! return `Result` with a typed error taxonomy so the task layer can wrap
//! failures uniformly while preserving the cause.
//!
//! # Example
//!
//! ```ignore
//! use capstan::transport::{PushRequest, Transport};
//!
//! fn push_release(transport: &dyn Transport, request: &PushRequest) {
//!     match transport.push(request) {
//!         Ok(()) => println!("pushed to {}", request.remote),
//!         Err(e) => eprintln!("push failed: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

use crate::git::GitError;
use crate::task::credentials::CredentialsHandle;

/// Errors from the push transport.
///
/// These map to the failure modes a push can hit: rejected credentials,
/// a missing remote, a refused ref update, or plain connectivity loss.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Credentials were rejected by the remote.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The destination remote is not configured in the repository.
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    /// The remote refused a ref update (non-fast-forward without force,
    /// or a server-side hook rejection).
    #[error("push rejected for {refname}: {reason}")]
    Rejected {
        /// The ref whose update was refused.
        refname: String,
        /// Reason reported by the remote.
        reason: String,
    },

    /// Network or connectivity failure.
    #[error("network error: {0}")]
    Network(String),

    /// Repository-side preparation failure (e.g. detached HEAD when the
    /// push scope is the current branch).
    #[error("repository error: {0}")]
    Repository(String),

    /// Internal transport error.
    #[error("transport error: {0}")]
    Internal(String),
}

impl From<GitError> for TransportError {
    fn from(err: GitError) -> Self {
        match err {
            GitError::RemoteNotFound { name } => TransportError::RemoteNotFound(name),
            other => TransportError::Repository(other.to_string()),
        }
    }
}

/// A fully resolved push operation.
///
/// Built fresh per task invocation from resolved values only; immutable
/// once constructed. `Debug` output is safe to log because
/// [`CredentialsHandle`] redacts secrets.
#[derive(Debug, Clone)]
pub struct PushRequest {
    /// Destination remote name.
    pub remote: String,
    /// Authentication strategy.
    pub credentials: CredentialsHandle,
    /// Include all tags in the push scope.
    pub push_tags: bool,
    /// Include all local branches in the push scope.
    pub push_all: bool,
    /// Allow non-fast-forward ref updates.
    pub force: bool,
}

/// Capability to execute a push against a remote.
pub trait Transport {
    /// Short name for diagnostics (e.g. `"libgit2"`, `"mock"`).
    fn name(&self) -> &'static str;

    /// Execute the push synchronously.
    ///
    /// Blocks until the operation completes or fails. No retries.
    fn push(&self, request: &PushRequest) -> Result<(), TransportError>;
}

/// Assemble the refspecs for a push request.
///
/// - Default scope is the current branch only.
/// - `push_all` widens the branch scope to every local branch.
/// - `push_tags` adds all tags on top of the branch scope.
/// - `force` prefixes every refspec with `+`, allowing non-fast-forward
///   updates.
///
/// `current_branch` is only consulted when `push_all` is false.
pub fn refspecs(request: &PushRequest, current_branch: &str) -> Vec<String> {
    let force = if request.force { "+" } else { "" };
    let mut specs = Vec::new();

    if request.push_all {
        specs.push(format!("{}refs/heads/*:refs/heads/*", force));
    } else {
        specs.push(format!(
            "{force}refs/heads/{branch}:refs/heads/{branch}",
            force = force,
            branch = current_branch
        ));
    }

    if request.push_tags {
        specs.push(format!("{}refs/tags/*:refs/tags/*", force));
    }

    specs
}
