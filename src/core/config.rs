//! Configuration file management.
//!
//! Reads the optional per-user `config.toml` and resolves the API token from
//! the environment. Tokens are never read from or written to the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::scope::Visibility;
use crate::error::{ConfigError, Result};

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Fallbacks for omitted command-line arguments
    #[serde(default)]
    pub defaults: Defaults,
}

/// API endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Platform host: `github.com` or an Enterprise Server hostname
    #[serde(default = "default_host")]
    pub host: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Defaults applied when the command line leaves a value out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Organization used when neither `--repo` nor `--org` is given
    #[serde(default)]
    pub org: Option<String>,
    /// Visibility for organization secrets
    #[serde(default)]
    pub visibility: Option<String>,
}

fn default_host() -> String {
    constants::DEFAULT_HOST.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Config file location: `$ACTSEAL_CONFIG`, else the user config dir.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read, and `ConfigError::InvalidValue` if it fails
    /// validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(host = %config.api.host, "config loaded");
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Checks:
    /// - Host is not empty and has no scheme
    /// - Timeout is positive
    /// - Default visibility, if set, is a known value
    pub fn validate(&self) -> Result<()> {
        let host = self.api.host.trim();
        if host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.host",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if host.contains("://") {
            return Err(ConfigError::InvalidValue {
                field: "api.host",
                reason: format!("expected a hostname, got {}", host),
            }
            .into());
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if let Some(visibility) = &self.defaults.visibility {
            visibility
                .parse::<Visibility>()
                .map_err(|_| ConfigError::InvalidValue {
                    field: "defaults.visibility",
                    reason: format!("unknown visibility: {}", visibility),
                })?;
        }

        Ok(())
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Default visibility, falling back to `private`.
    pub fn default_visibility(&self) -> Visibility {
        self.defaults
            .visibility
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Visibility::Private)
    }
}

/// API token from the first set, non-empty token variable.
///
/// # Errors
///
/// Returns `ConfigError::MissingToken` if none is set.
pub fn token() -> Result<String> {
    constants::TOKEN_ENVS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingToken.into())
}
