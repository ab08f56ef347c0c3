//! task::remote
//!
//! Remote name resolution.
//!
//! # Design
//!
//! The destination remote can be configured as a literal string or as a
//! deferred computation evaluated at execution time. Deferral matters in
//! build pipelines: an upstream step may rewrite configuration between the
//! moment the task is wired up and the moment it runs, so the value is
//! re-evaluated on every run and never cached.

use std::fmt;

use thiserror::Error;

/// Default remote name used when no remote is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Failure evaluating a deferred remote value.
///
/// Propagated unchanged to the caller; never wrapped in the uniform push
/// error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ResolveError {
    /// Description of the evaluation failure.
    pub message: String,
}

impl ResolveError {
    /// Create a resolution error from any displayable cause.
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// A remote destination: a literal name, or a computation producing one.
pub enum RemoteSpec {
    /// A fixed remote name.
    Literal(String),
    /// A zero-argument computation invoked at resolution time.
    Deferred(Box<dyn Fn() -> Result<String, ResolveError> + Send + Sync>),
}

impl RemoteSpec {
    /// A literal remote name.
    pub fn literal(name: impl Into<String>) -> Self {
        RemoteSpec::Literal(name.into())
    }

    /// A deferred remote whose value is computed when the task runs.
    ///
    /// The computation may yield any displayable value; it is coerced to a
    /// string via its `Display` implementation.
    pub fn deferred<F, T>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: fmt::Display,
    {
        RemoteSpec::Deferred(Box::new(move || Ok(f().to_string())))
    }

    /// A deferred remote whose computation may fail.
    ///
    /// Failures surface unchanged as [`ResolveError`].
    pub fn try_deferred<F>(f: F) -> Self
    where
        F: Fn() -> Result<String, ResolveError> + Send + Sync + 'static,
    {
        RemoteSpec::Deferred(Box::new(f))
    }
}

impl fmt::Debug for RemoteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteSpec::Literal(name) => f.debug_tuple("Literal").field(name).finish(),
            RemoteSpec::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for RemoteSpec {
    fn from(name: &str) -> Self {
        RemoteSpec::literal(name)
    }
}

impl From<String> for RemoteSpec {
    fn from(name: String) -> Self {
        RemoteSpec::Literal(name)
    }
}

/// Resolve a remote spec to a concrete remote name.
///
/// - A literal is returned unchanged.
/// - A deferred value is evaluated now, exactly once.
/// - An absent spec resolves to [`DEFAULT_REMOTE`].
///
/// No caching happens here: the enclosing task calls this on every run.
///
/// # Errors
///
/// Returns the [`ResolveError`] from a failed deferred computation,
/// unchanged.
pub fn resolve(spec: Option<&RemoteSpec>) -> Result<String, ResolveError> {
    match spec {
        None => Ok(DEFAULT_REMOTE.to_string()),
        Some(RemoteSpec::Literal(name)) => Ok(name.clone()),
        Some(RemoteSpec::Deferred(thunk)) => thunk(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn absent_resolves_to_origin() {
        assert_eq!(resolve(None).unwrap(), "origin");
    }

    #[test]
    fn literal_resolves_verbatim() {
        let spec = RemoteSpec::literal("upstream");
        assert_eq!(resolve(Some(&spec)).unwrap(), "upstream");
    }

    #[test]
    fn deferred_evaluates_exactly_once_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let spec = RemoteSpec::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "mirror"
        });

        assert_eq!(resolve(Some(&spec)).unwrap(), "mirror");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // A second resolution re-evaluates; no caching.
        assert_eq!(resolve(Some(&spec)).unwrap(), "mirror");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn deferred_coerces_via_display() {
        let spec = RemoteSpec::deferred(|| 42);
        assert_eq!(resolve(Some(&spec)).unwrap(), "42");
    }

    #[test]
    fn try_deferred_propagates_failure_unchanged() {
        let spec = RemoteSpec::try_deferred(|| Err(ResolveError::new("provider unavailable")));
        let err = resolve(Some(&spec)).unwrap_err();
        assert_eq!(err.to_string(), "provider unavailable");
    }

    #[test]
    fn from_str_is_literal() {
        let spec: RemoteSpec = "origin".into();
        assert!(matches!(spec, RemoteSpec::Literal(ref n) if n == "origin"));
    }
}
