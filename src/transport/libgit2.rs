//! transport::libgit2
//!
//! Production push transport over an open repository handle.
//!
//! # Design
//!
//! One push is one synchronous libgit2 call. The transport:
//!
//! 1. Looks up the destination remote by name.
//! 2. Assembles refspecs from the request scope (see
//!    [`crate::transport::refspecs`]).
//! 3. Attaches a credential callback that pattern-matches the request's
//!    [`CredentialsHandle`]: explicit credentials become plaintext
//!    user/pass, interactive defers to the injected
//!    [`CredentialPrompt`] capability.
//! 4. Collects per-ref rejections via `push_update_reference`.
//! 5. Classifies any failure into the [`TransportError`] taxonomy.
//!
//! The credential callback is guarded against unbounded retries: libgit2
//! re-invokes the callback after each rejection, so after a fixed number
//! of attempts the transport gives up with an authentication error.

use std::cell::RefCell;
use std::sync::Arc;

use crate::auth::CredentialPrompt;
use crate::git::Git;
use crate::task::credentials::CredentialsHandle;

use super::traits::{refspecs, PushRequest, Transport, TransportError};

/// Attempts before the credential callback gives up.
const MAX_CREDENTIAL_ATTEMPTS: usize = 3;

/// Push transport backed by libgit2.
pub struct Libgit2Transport {
    git: Git,
    prompt: Arc<dyn CredentialPrompt>,
}

impl Libgit2Transport {
    /// Create a transport over an open repository.
    ///
    /// `prompt` supplies credentials when the request carries
    /// [`CredentialsHandle::Interactive`].
    pub fn new(git: Git, prompt: Arc<dyn CredentialPrompt>) -> Self {
        Self { git, prompt }
    }

    /// Build the credential callback for one push.
    fn credential_callback<'a>(
        &'a self,
        credentials: &'a CredentialsHandle,
        attempts: &'a RefCell<usize>,
    ) -> impl FnMut(&str, Option<&str>, git2::CredentialType) -> Result<git2::Cred, git2::Error> + 'a
    {
        move |url, username_from_url, allowed| {
            let attempt = {
                let mut attempts = attempts.borrow_mut();
                *attempts += 1;
                *attempts
            };
            if attempt > MAX_CREDENTIAL_ATTEMPTS {
                return Err(git2::Error::from_str("credentials rejected by remote"));
            }

            match credentials {
                CredentialsHandle::Explicit { username, password } => {
                    // Explicit credentials are fixed; a second request means
                    // the remote rejected them.
                    if attempt > 1 {
                        return Err(git2::Error::from_str("credentials rejected by remote"));
                    }
                    git2::Cred::userpass_plaintext(username, password)
                }
                CredentialsHandle::Interactive => {
                    if allowed.contains(git2::CredentialType::SSH_KEY) {
                        if let Some(username) = username_from_url {
                            return git2::Cred::ssh_key_from_agent(username);
                        }
                    }
                    if !allowed.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                        return Err(git2::Error::from_str(
                            "remote requires an unsupported credential type",
                        ));
                    }
                    let username = match username_from_url {
                        Some(name) => name.to_string(),
                        None => self
                            .prompt
                            .username(url)
                            .map_err(|e| git2::Error::from_str(&e.to_string()))?,
                    };
                    let password = self
                        .prompt
                        .password(url, &username)
                        .map_err(|e| git2::Error::from_str(&e.to_string()))?;
                    git2::Cred::userpass_plaintext(&username, &password)
                }
            }
        }
    }
}

impl Transport for Libgit2Transport {
    fn name(&self) -> &'static str {
        "libgit2"
    }

    fn push(&self, request: &PushRequest) -> Result<(), TransportError> {
        // Scope preparation failures (detached or unborn HEAD) are
        // repository-side errors, not network ones.
        let current_branch = if request.push_all {
            String::new()
        } else {
            self.git.current_branch()?
        };
        let specs = refspecs(request, &current_branch);

        let mut remote = self.git.raw().find_remote(&request.remote).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                TransportError::RemoteNotFound(request.remote.clone())
            } else {
                TransportError::Internal(e.message().to_string())
            }
        })?;

        let attempts = RefCell::new(0usize);
        let rejections: RefCell<Vec<(String, String)>> = RefCell::new(Vec::new());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(self.credential_callback(&request.credentials, &attempts));
        callbacks.push_update_reference(|refname, status| {
            if let Some(reason) = status {
                rejections
                    .borrow_mut()
                    .push((refname.to_string(), reason.to_string()));
            }
            Ok(())
        });
        // TODO: wire push_transfer_progress into ui::output so long pushes
        // show progress instead of blocking silently.

        let mut options = git2::PushOptions::new();
        options.remote_callbacks(callbacks);

        let result = remote.push(&specs, Some(&mut options));
        drop(options);

        if let Err(err) = result {
            return Err(classify(err, &specs));
        }

        let rejections = rejections.into_inner();
        if let Some((refname, reason)) = rejections.into_iter().next() {
            return Err(TransportError::Rejected { refname, reason });
        }

        Ok(())
    }
}

/// Classify a libgit2 push failure into the transport error taxonomy.
fn classify(err: git2::Error, specs: &[String]) -> TransportError {
    let message = err.message().to_string();

    if err.code() == git2::ErrorCode::Auth
        || err.class() == git2::ErrorClass::Ssh && message.contains("auth")
        || message.contains("credentials rejected")
        || message.contains("401")
    {
        return TransportError::Auth(message);
    }

    if err.code() == git2::ErrorCode::NotFastForward
        || message.contains("fast-forward")
        || message.contains("fastforwardable")
    {
        let refname = specs.first().cloned().unwrap_or_default();
        return TransportError::Rejected {
            refname,
            reason: message,
        };
    }

    if err.class() == git2::ErrorClass::Net || err.class() == git2::ErrorClass::Http {
        return TransportError::Network(message);
    }

    TransportError::Internal(message)
}
