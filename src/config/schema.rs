//! config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$CAPSTAN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/capstan/config.toml`
//! 3. `~/.capstan/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `capstan.toml` in the repository working directory;
//! intended to be committed.
//!
//! # Local Config
//!
//! Located at `.git/capstan/config.toml`; per-clone override, never
//! committed. Same schema as the project config.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g. remote must be
//! non-empty, credentials must not set a password without a username).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// interactive = true
/// remote = "origin"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default interactive mode
    pub interactive: Option<bool>,

    /// Default remote name
    pub remote: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if remote.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Project or local (per-clone) configuration.
///
/// # Example
///
/// ```toml
/// remote = "origin"
/// push_tags = true
/// force = false
///
/// [credentials]
/// username = "release-bot"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Remote name (default: "origin")
    pub remote: Option<String>,

    /// Include tags in the push scope
    pub push_tags: Option<bool>,

    /// Include all branches in the push scope
    pub push_all: Option<bool>,

    /// Allow non-fast-forward updates
    pub force: Option<bool>,

    /// Explicit credentials (both fields required together to take effect)
    pub credentials: Option<CredentialsConfig>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if remote.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote cannot be empty".to_string(),
                ));
            }
        }
        if let Some(credentials) = &self.credentials {
            credentials.validate()?;
        }
        Ok(())
    }
}

/// Explicit credential configuration.
///
/// A password without a username is a configuration mistake and is
/// rejected at load time; a username without a password is allowed (the
/// password may arrive from the environment or a prompt).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialsConfig {
    /// Username for explicit authentication
    pub username: Option<String>,

    /// Password for explicit authentication
    pub password: Option<String>,
}

impl CredentialsConfig {
    /// Validate the credential configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.password.is_some() && self.username.as_deref().unwrap_or("").is_empty() {
            return Err(ConfigError::InvalidValue(
                "credentials.password set without credentials.username".to_string(),
            ));
        }
        Ok(())
    }
}
