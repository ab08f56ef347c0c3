//! auth::prompt
//!
//! Credential prompt capability and implementations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode
//! (CI, `--quiet`, piped stdin) the environment variables
//! `CAPSTAN_USERNAME` / `CAPSTAN_PASSWORD` are the only source; if they
//! are absent the prompt fails with a clear error rather than hanging on
//! a read from a non-terminal.
//!
//! # Security
//!
//! Passwords are read masked via `rpassword` and are never echoed or
//! logged.

use std::io::{self, IsTerminal, Write};

use thiserror::Error;

/// Environment variable consulted for the username.
pub const USERNAME_ENV: &str = "CAPSTAN_USERNAME";

/// Environment variable consulted for the password.
pub const PASSWORD_ENV: &str = "CAPSTAN_PASSWORD";

/// Errors from credential prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode and no credentials in environment")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Capability to obtain credentials at push time.
///
/// Injected into the transport at construction time so the interactive
/// fallback can be replaced with a deterministic double in tests.
pub trait CredentialPrompt: Send + Sync {
    /// Username for authenticating against `url`.
    fn username(&self, url: &str) -> Result<String, PromptError>;

    /// Password for `username` at `url`. Never logged by callers.
    fn password(&self, url: &str, username: &str) -> Result<String, PromptError>;
}

/// Environment-backed then terminal-backed prompt.
///
/// Checks `CAPSTAN_USERNAME` / `CAPSTAN_PASSWORD` first, then falls back
/// to asking on the terminal when interactive mode is enabled.
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    /// Create a prompt; `interactive` gates terminal interaction.
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    fn can_prompt(&self) -> bool {
        self.interactive && io::stdin().is_terminal()
    }
}

impl CredentialPrompt for TerminalPrompt {
    fn username(&self, url: &str) -> Result<String, PromptError> {
        if let Ok(username) = std::env::var(USERNAME_ENV) {
            if !username.is_empty() {
                return Ok(username);
            }
        }
        if !self.can_prompt() {
            return Err(PromptError::NotInteractive);
        }

        eprint!("Username for {}: ", url);
        io::stderr()
            .flush()
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        let username = input.trim().to_string();
        if username.is_empty() {
            return Err(PromptError::Cancelled);
        }
        Ok(username)
    }

    fn password(&self, url: &str, username: &str) -> Result<String, PromptError> {
        if let Ok(password) = std::env::var(PASSWORD_ENV) {
            if !password.is_empty() {
                return Ok(password);
            }
        }
        if !self.can_prompt() {
            return Err(PromptError::NotInteractive);
        }

        eprint!("Password for {} at {}: ", username, url);
        io::stderr()
            .flush()
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        rpassword::read_password().map_err(|e| PromptError::IoError(e.to_string()))
    }
}

/// Fixed deterministic credentials for tests.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Create a double that always answers with the given pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialPrompt for StaticCredentials {
    fn username(&self, _url: &str) -> Result<String, PromptError> {
        Ok(self.username.clone())
    }

    fn password(&self, _url: &str, _username: &str) -> Result<String, PromptError> {
        Ok(self.password.clone())
    }
}
