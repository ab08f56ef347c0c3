//! task
//!
//! The push task: configuration resolution and execution.
//!
//! # Architecture
//!
//! The task layer owns the genuinely interesting logic in Capstan - how a
//! concrete push operation is derived from a mix of explicit configuration,
//! deferred values, and defaults:
//!
//! - [`remote`] - resolves a remote name from a literal or deferred value
//! - [`credentials`] - selects the authentication strategy
//! - [`push`] - assembles the push request and drives the transport
//!
//! Each run is a fresh, independent one-shot: resolve, assemble, execute.
//! Nothing is cached across invocations, so configuration changes between
//! task construction and execution are honored.

pub mod credentials;
pub mod push;
pub mod remote;

pub use credentials::{CredentialsHandle, PasswordCredentials};
pub use push::{PushError, PushTask};
pub use remote::{RemoteSpec, ResolveError, DEFAULT_REMOTE};
