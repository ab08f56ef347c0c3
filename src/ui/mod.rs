//! ui
//!
//! Output utilities.
//!
//! # Design
//!
//! All terminal output goes through this module to ensure consistent
//! formatting and proper handling of the quiet/debug flags. Interactive
//! credential prompting is NOT here - that lives in [`crate::auth`] as an
//! injected capability.

pub mod output;

pub use output::Verbosity;
