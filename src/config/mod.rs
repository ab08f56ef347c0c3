//! config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Capstan has three configuration scopes:
//! - **Global**: user-level defaults
//! - **Project**: `capstan.toml` at the repository root (committable)
//! - **Local**: `.git/capstan/config.toml` (per-clone override)
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. Local config file
//! 5. CLI flags (not handled here)
//!
//! The `"origin"` remote default deliberately does NOT live here: absence
//! of a configured remote is passed through to the task's remote resolver,
//! which owns that default.
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$CAPSTAN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/capstan/config.toml`
//! 3. `~/.capstan/config.toml` (canonical write location)

pub mod schema;

pub use schema::{CredentialsConfig, GlobalConfig, ProjectConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence automatically: local overrides
/// project, project overrides global.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Project configuration (`capstan.toml`), if present
    pub project: Option<ProjectConfig>,
    /// Local configuration (`.git/capstan/config.toml`), if present
    pub local: Option<ProjectConfig>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// `workdir` and `git_dir` locate the project and local scopes; pass
    /// `None` when running outside a repository (global scope only).
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. Missing files are not an error.
    pub fn load(workdir: Option<&Path>, git_dir: Option<&Path>) -> Result<Config, ConfigError> {
        let global = Self::load_global()?;
        Self::load_with_global(global, workdir, git_dir)
    }

    /// Load the repository scopes on top of an already-loaded global
    /// config. Seam for tests, which must not touch the process
    /// environment the global lookup reads.
    fn load_with_global(
        global: GlobalConfig,
        workdir: Option<&Path>,
        git_dir: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        global.validate()?;

        let project = match workdir {
            Some(dir) => Self::read_project(&dir.join("capstan.toml"))?,
            None => None,
        };
        if let Some(ref p) = project {
            p.validate()?;
        }

        let local = match git_dir {
            Some(dir) => Self::read_project(&dir.join("capstan/config.toml"))?,
            None => None,
        };
        if let Some(ref l) = local {
            l.validate()?;
        }

        Ok(Config {
            global,
            project,
            local,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<GlobalConfig, ConfigError> {
        // 1. Check $CAPSTAN_CONFIG
        if let Ok(path) = std::env::var("CAPSTAN_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::read_global(&path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/capstan/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("capstan/config.toml");
            if path.exists() {
                return Self::read_global(&path);
            }
        }

        // 3. Check ~/.capstan/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".capstan/config.toml");
            if path.exists() {
                return Self::read_global(&path);
            }
        }

        Ok(GlobalConfig::default())
    }

    fn read_global(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn read_project(path: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Some(config))
    }

    fn scoped<T, F>(&self, select: F) -> Option<T>
    where
        F: Fn(&ProjectConfig) -> Option<T>,
    {
        self.local
            .as_ref()
            .and_then(&select)
            .or_else(|| self.project.as_ref().and_then(&select))
    }

    /// Configured remote name, if any scope sets one.
    ///
    /// Absence means "let the resolver default to origin".
    pub fn remote(&self) -> Option<String> {
        self.scoped(|c| c.remote.clone())
            .or_else(|| self.global.remote.clone())
    }

    /// Whether tags are included in the push scope.
    pub fn push_tags(&self) -> bool {
        self.scoped(|c| c.push_tags).unwrap_or(false)
    }

    /// Whether all branches are included in the push scope.
    pub fn push_all(&self) -> bool {
        self.scoped(|c| c.push_all).unwrap_or(false)
    }

    /// Whether non-fast-forward updates are allowed.
    pub fn force(&self) -> bool {
        self.scoped(|c| c.force).unwrap_or(false)
    }

    /// Configured credentials, if any scope sets them.
    pub fn credentials(&self) -> Option<CredentialsConfig> {
        self.scoped(|c| c.credentials.clone())
    }

    /// Interactive default from the global scope.
    pub fn interactive(&self) -> Option<bool> {
        self.global.interactive
    }
}
