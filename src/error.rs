//! Error types.
//!
//! Each subsystem owns a focused error enum; all of them fold into [`Error`]
//! so callers can propagate with `?` and still match on the specific cause.

use thiserror::Error;

use crate::core::provision::Stage;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A provisioning stage failed. `source` is the untouched cause.
    #[error("{stage} for {context}: {source}")]
    Provision {
        stage: Stage,
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The innermost error, skipping any provisioning stage wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Provision { source, .. } => source.root(),
            other => other,
        }
    }

    /// The stage that failed, if this error came out of the orchestrator.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Provision { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Public key decoding and retrieval errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("failed to decode public key: {reason}")]
    Decode { reason: String },

    #[error("failed to find public key at {path}")]
    NotFound { path: String },
}

/// Repository name resolution errors.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("could not find {org}/{name}")]
    RepositoryNotFound { org: String, name: String },

    #[error("no repository id returned for {org}/{name}")]
    MissingFromResponse { org: String, name: String },
}

/// Failures reported by the transport collaborator.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{path} returned HTTP {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("invalid response from {path}: {reason}")]
    InvalidResponse { path: String, reason: String },

    #[error("graphql query failed: {0}")]
    GraphQl(String),
}

/// Sealing errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("failed to seal secret: {0}")]
    SealFailed(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret value for {0} cannot be empty")]
    EmptyValue(String),

    #[error("invalid repository '{0}': expected OWNER/NAME")]
    InvalidRepo(String),

    #[error("invalid organization '{0}': expected a bare organization name")]
    InvalidOrg(String),

    #[error("invalid visibility '{0}': expected all, private, or selected")]
    InvalidVisibility(String),

    #[error("repositories can only be listed when visibility is 'selected'")]
    ReposRequireSelected,

    #[error("visibility 'selected' requires at least one repository")]
    SelectedRequiresRepos,

    #[error("no target: pass --repo OWNER/NAME or --org ORG")]
    MissingTarget,

    #[error("--visibility and --repos only apply to organization secrets")]
    OrgOnlyOption,

    #[error("no value for {0}: pass --body or pipe the value on stdin")]
    MissingValue(String),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("no API token found")]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, Error>;
