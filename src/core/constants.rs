//! Constants used throughout actseal.
//!
//! Centralizes magic strings and protocol values.

/// Length in bytes of a recipient public key.
pub const KEY_LEN: usize = 32;

/// Default platform host.
pub const DEFAULT_HOST: &str = "github.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Config file name inside the per-user config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Directory name under the user's config directory.
pub const CONFIG_DIR: &str = "actseal";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ACTSEAL_CONFIG";

/// Environment variable controlling log filtering.
pub const LOG_ENV: &str = "ACTSEAL_LOG";

/// Token environment variables, checked in order.
pub const TOKEN_ENVS: &[&str] = &["ACTSEAL_TOKEN", "GH_TOKEN", "GITHUB_TOKEN"];

/// GraphQL error type marking an unresolvable entity.
pub const GRAPHQL_NOT_FOUND: &str = "NOT_FOUND";

/// Secret names may not use this reserved prefix.
pub const RESERVED_PREFIX: &str = "GITHUB_";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("actseal/", env!("CARGO_PKG_VERSION"));
