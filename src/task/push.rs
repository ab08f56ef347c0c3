//! task::push
//!
//! The push task: assembles and executes one push.
//!
//! # Design
//!
//! `PushTask` holds the five knobs (remote, credentials, tag scope, branch
//! scope, force) and nothing else. `run` is a fresh one-shot every time:
//! resolve the remote, select the credential strategy, build an immutable
//! [`PushRequest`], hand it to the transport, and wrap any transport
//! failure in one uniform error carrying the original cause. No state
//! survives between runs and no retry is attempted.
//!
//! # Example
//!
//! ```
//! use capstan::task::{PushTask, RemoteSpec};
//! use capstan::transport::MockTransport;
//!
//! let mut task = PushTask::new();
//! task.set_remote(RemoteSpec::literal("upstream"));
//! task.set_push_tags(true);
//!
//! let transport = MockTransport::new();
//! task.run(&transport).unwrap();
//! assert_eq!(transport.requests()[0].remote, "upstream");
//! assert!(transport.requests()[0].push_tags);
//! ```

use thiserror::Error;

use crate::transport::{PushRequest, Transport, TransportError};

use super::credentials::{self, PasswordCredentials};
use super::remote::{self, RemoteSpec, ResolveError};

/// Uniform error reported by a failed push task.
#[derive(Debug, Error)]
pub enum PushError {
    /// Failure evaluating a deferred remote value; surfaced unchanged.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Any failure inside the transport call, cause preserved.
    #[error("Problem pushing to repository.")]
    Transport {
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },
}

/// A configured push task.
///
/// Defaults: remote unset (resolves to `"origin"`), no credentials
/// (interactive fallback), current branch only, no tags, no force.
#[derive(Debug, Default)]
pub struct PushTask {
    remote: Option<RemoteSpec>,
    credentials: Option<PasswordCredentials>,
    push_tags: bool,
    push_all: bool,
    force: bool,
}

impl PushTask {
    /// Create a task with all knobs at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination remote.
    pub fn set_remote(&mut self, spec: impl Into<RemoteSpec>) -> &mut Self {
        self.remote = Some(spec.into());
        self
    }

    /// Include all tags in the push scope.
    pub fn set_push_tags(&mut self, push_tags: bool) -> &mut Self {
        self.push_tags = push_tags;
        self
    }

    /// Include all local branches in the push scope.
    pub fn set_push_all(&mut self, push_all: bool) -> &mut Self {
        self.push_all = push_all;
        self
    }

    /// Allow non-fast-forward ref updates.
    pub fn set_force(&mut self, force: bool) -> &mut Self {
        self.force = force;
        self
    }

    /// Replace the stored credentials object wholesale.
    pub fn set_credentials(&mut self, credentials: PasswordCredentials) -> &mut Self {
        self.credentials = Some(credentials);
        self
    }

    /// Configure credentials through a closure.
    ///
    /// Lazily creates an empty [`PasswordCredentials`] on first use, then
    /// hands the same owned object to every subsequent call - two calls
    /// mutate one object, never two.
    pub fn credentials<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut PasswordCredentials),
    {
        let credentials = self.credentials.get_or_insert_with(PasswordCredentials::default);
        configure(credentials);
        self
    }

    /// The stored credentials, if any have been configured.
    pub fn stored_credentials(&self) -> Option<&PasswordCredentials> {
        self.credentials.as_ref()
    }

    /// Resolve the knobs into an immutable push request.
    ///
    /// Re-resolves the remote on every call; deferred values are honored
    /// at execution time, not configuration time.
    ///
    /// # Errors
    ///
    /// Returns the [`ResolveError`] from a failed deferred remote,
    /// unchanged.
    pub fn resolve(&self) -> Result<PushRequest, ResolveError> {
        let remote = remote::resolve(self.remote.as_ref())?;
        let credentials = credentials::resolve(self.credentials.as_ref());
        Ok(PushRequest {
            remote,
            credentials,
            push_tags: self.push_tags,
            push_all: self.push_all,
            force: self.force,
        })
    }

    /// Execute the push.
    ///
    /// Blocks until the transport completes or fails. All-or-nothing: on
    /// any transport failure the task reports one [`PushError`] with the
    /// fixed message and the original cause; nothing is retried.
    pub fn run(&self, transport: &dyn Transport) -> Result<(), PushError> {
        let request = self.resolve()?;
        transport
            .push(&request)
            .map_err(|source| PushError::Transport { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::credentials::CredentialsHandle;
    use crate::task::remote::RemoteSpec;
    use crate::transport::MockTransport;

    #[test]
    fn defaults_push_current_branch_to_origin() {
        let task = PushTask::new();
        let transport = MockTransport::new();
        task.run(&transport).unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.remote, "origin");
        assert_eq!(request.credentials, CredentialsHandle::Interactive);
        assert!(!request.push_tags);
        assert!(!request.push_all);
        assert!(!request.force);
    }

    #[test]
    fn knobs_flow_into_request() {
        let mut task = PushTask::new();
        task.set_remote("mirror")
            .set_push_tags(true)
            .set_push_all(true)
            .set_force(true)
            .set_credentials(PasswordCredentials::new("u", "p"));

        let transport = MockTransport::new();
        task.run(&transport).unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.remote, "mirror");
        assert!(request.push_tags);
        assert!(request.push_all);
        assert!(request.force);
        assert!(matches!(
            request.credentials,
            CredentialsHandle::Explicit { ref username, .. } if username == "u"
        ));
    }

    #[test]
    fn deferred_remote_resolved_at_run_time() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut task = PushTask::new();
        task.set_remote(RemoteSpec::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "late-bound"
        }));

        // Configuration time: nothing evaluated yet.
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let transport = MockTransport::new();
        task.run(&transport).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(transport.requests()[0].remote, "late-bound");

        // Each run re-resolves.
        task.run(&transport).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn credentials_configurator_mutates_one_object() {
        let mut task = PushTask::new();
        task.credentials(|c| c.username = Some("u".to_string()));
        task.credentials(|c| c.password = Some("p".to_string()));

        let stored = task.stored_credentials().unwrap();
        assert_eq!(stored.username.as_deref(), Some("u"));
        assert_eq!(stored.password.as_deref(), Some("p"));

        // Both halves landed on the same object, so resolution is explicit.
        let request = task.resolve().unwrap();
        assert!(matches!(
            request.credentials,
            CredentialsHandle::Explicit { .. }
        ));
    }

    #[test]
    fn transport_failure_wrapped_with_fixed_message() {
        let task = PushTask::new();
        let transport = MockTransport::failing(TransportError::Rejected {
            refname: "refs/heads/main:refs/heads/main".to_string(),
            reason: "non-fast-forward".to_string(),
        });

        let err = task.run(&transport).unwrap_err();
        assert_eq!(err.to_string(), "Problem pushing to repository.");

        // Cause is preserved for diagnostics.
        let source = std::error::Error::source(&err).expect("cause preserved");
        assert!(source.to_string().contains("non-fast-forward"));
    }

    #[test]
    fn resolve_failure_surfaces_unchanged() {
        let mut task = PushTask::new();
        task.set_remote(RemoteSpec::try_deferred(|| {
            Err(ResolveError::new("no such property"))
        }));

        let transport = MockTransport::new();
        let err = task.run(&transport).unwrap_err();
        assert!(matches!(err, PushError::Resolve(_)));
        assert_eq!(err.to_string(), "no such property");

        // The transport was never invoked with a partially resolved request.
        assert!(transport.requests().is_empty());
    }
}
