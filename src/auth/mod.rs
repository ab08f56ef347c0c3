//! auth
//!
//! Interactive/environment credential fallback.
//!
//! # Design
//!
//! When the task has no explicit credentials, the transport asks an
//! injected [`CredentialPrompt`] capability at push time. The capability
//! is supplied at transport construction so tests can substitute a fixed
//! deterministic credential.

mod prompt;

pub use prompt::{
    CredentialPrompt, PromptError, StaticCredentials, TerminalPrompt, PASSWORD_ENV, USERNAME_ENV,
};
