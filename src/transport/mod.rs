//! transport
//!
//! Push transport abstraction.
//!
//! # Design
//!
//! The transport is the capability the task consumes: "execute a push
//! given target, credentials, tag/branch scope, and force flag". Keeping
//! it behind a trait lets the task be exercised against a deterministic
//! in-memory transport in tests while production uses libgit2.
//!
//! - [`traits`] - the [`Transport`] trait, [`PushRequest`], and the error
//!   taxonomy at the transport boundary
//! - [`libgit2`] - production transport over an open repository handle
//! - [`mock`] - recording transport for deterministic tests

pub mod libgit2;
pub mod mock;
pub mod traits;

pub use libgit2::Libgit2Transport;
pub use mock::MockTransport;
pub use traits::{refspecs, PushRequest, Transport, TransportError};
