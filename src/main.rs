//! Capstan binary entry point.
//!
//! All real work happens in the library; this shim runs the CLI and turns
//! a failure into an `error:` line, its cause chain, and exit code 1.

use capstan::ui;

fn main() {
    if let Err(err) = capstan::cli::run() {
        ui::output::error_chain(&err);
        std::process::exit(1);
    }
}
