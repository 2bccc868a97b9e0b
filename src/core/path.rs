//! Scope paths.
//!
//! Addresses of the public-key and secret endpoints for a repository or an
//! organization, relative to the REST API root.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ValidationError};

/// A repository reference in `OWNER/NAME` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repo {
    owner: String,
    name: String,
}

impl Repo {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(ValidationError::InvalidRepo(s.to_string()).into()),
        }
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Public-key endpoint for a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPath {
    Repository(Repo),
    Organization(String),
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository(repo) => {
                write!(f, "repos/{}/actions/secrets/public-key", repo.full_name())
            }
            Self::Organization(org) => write!(f, "orgs/{}/actions/secrets/public-key", org),
        }
    }
}

/// Endpoint for one named secret in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretPath {
    Repository { repo: Repo, secret: String },
    Organization { org: String, secret: String },
}

impl SecretPath {
    /// Secret name this path addresses.
    pub fn secret(&self) -> &str {
        match self {
            Self::Repository { secret, .. } | Self::Organization { secret, .. } => secret,
        }
    }
}

impl fmt::Display for SecretPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository { repo, secret } => {
                write!(f, "repos/{}/actions/secrets/{}", repo.full_name(), secret)
            }
            Self::Organization { org, secret } => {
                write!(f, "orgs/{}/actions/secrets/{}", org, secret)
            }
        }
    }
}
