//! ui::output
//!
//! Terminal output helpers.
//!
//! # Design
//!
//! Three levels (quiet/normal/debug) derived from the global flags.
//! Success and warning lines respect `--quiet`; the error chain always
//! prints - one `error:` line plus `caused by:` lines - because a failed
//! pipeline step must leave a usable diagnostic even in quiet mode. The
//! dry-run plan is NOT printed through this module: it is the command's
//! product and goes to stdout unconditionally.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Quiet wins over debug.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug line to stderr (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print a warning to stderr (suppressed in quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a success line to stdout (suppressed in quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error with its full cause chain (always shown).
///
/// Renders as one `error:` line followed by one `caused by:` line per
/// underlying cause, matching what pipeline logs expect.
pub fn error_chain(err: &anyhow::Error) {
    eprintln!("error: {}", err);
    for cause in err.chain().skip(1) {
        eprintln!("caused by: {}", cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }
}
