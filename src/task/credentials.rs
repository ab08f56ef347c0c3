//! task::credentials
//!
//! Credential selection for the push transport.
//!
//! # Design
//!
//! The task stores at most one [`PasswordCredentials`] object. At run time
//! the resolver selects one of two strategies:
//!
//! - **Explicit**: username and password are both present and non-empty.
//! - **Interactive**: anything less. Authentication is deferred to the
//!   injected [`crate::auth::CredentialPrompt`] capability at push time.
//!
//! A partially filled explicit credential is never produced. Selection is
//! pure: nothing is logged or persisted, and `Debug` output redacts the
//! password.

use std::fmt;

/// Configurable username/password pair.
///
/// Both fields default to unset. The pair only becomes an explicit
/// credential when both are present and non-empty; see [`resolve`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordCredentials {
    /// Username, if configured.
    pub username: Option<String>,
    /// Password, if configured. Never logged.
    pub password: Option<String>,
}

impl PasswordCredentials {
    /// Create credentials with both fields set.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The authentication strategy handed to the push transport.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialsHandle {
    /// Explicit username/password; both guaranteed non-empty.
    Explicit {
        /// Username to authenticate as.
        username: String,
        /// Password or token. Never logged.
        password: String,
    },
    /// No stored secret; the transport asks the injected prompt capability.
    Interactive,
}

impl CredentialsHandle {
    /// Short label for plan output (`"explicit"` / `"interactive"`).
    pub fn strategy(&self) -> &'static str {
        match self {
            CredentialsHandle::Explicit { .. } => "explicit",
            CredentialsHandle::Interactive => "interactive",
        }
    }
}

impl fmt::Debug for CredentialsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsHandle::Explicit { username, .. } => f
                .debug_struct("Explicit")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            CredentialsHandle::Interactive => f.write_str("Interactive"),
        }
    }
}

/// Select the authentication strategy for a push.
///
/// Returns [`CredentialsHandle::Explicit`] only when both username and
/// password are present and non-empty; every other combination falls back
/// to [`CredentialsHandle::Interactive`].
pub fn resolve(stored: Option<&PasswordCredentials>) -> CredentialsHandle {
    match stored {
        Some(PasswordCredentials {
            username: Some(username),
            password: Some(password),
        }) if !username.is_empty() && !password.is_empty() => CredentialsHandle::Explicit {
            username: username.clone(),
            password: password.clone(),
        },
        _ => CredentialsHandle::Interactive,
    }
}
