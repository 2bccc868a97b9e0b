//! Secret scopes.
//!
//! A secret lives either on one repository or on an organization. Organization
//! secrets carry a visibility, and only `selected` visibility names the
//! repositories allowed to read the secret.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::path::{KeyPath, Repo, SecretPath};
use crate::core::validation;
use crate::error::{Error, Result, ValidationError};

/// Organization secret visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    All,
    Private,
    Selected,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Private => "private",
            Self::Selected => "selected",
        }
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "private" => Ok(Self::Private),
            "selected" => Ok(Self::Selected),
            _ => Err(ValidationError::InvalidVisibility(s.to_string()).into()),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a secret is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretScope {
    Repository(Repo),
    Organization {
        org: String,
        visibility: Visibility,
        repositories: Vec<String>,
    },
}

impl SecretScope {
    /// Repository-scoped secret.
    pub fn repository(repo: Repo) -> Self {
        Self::Repository(repo)
    }

    /// Organization-scoped secret.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if repositories are given for a visibility
    /// other than `selected`, or if `selected` is used without any.
    pub fn organization(
        org: impl Into<String>,
        visibility: Visibility,
        repositories: Vec<String>,
    ) -> Result<Self> {
        let scope = Self::Organization {
            org: org.into(),
            visibility,
            repositories,
        };
        scope.validate()?;
        Ok(scope)
    }

    /// Check the organization invariants. Variants can be built directly, so
    /// anything that acts on a scope re-checks it here.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an organization name that is not a single
    /// path segment, or a repository list that does not match the visibility.
    pub fn validate(&self) -> Result<()> {
        let Self::Organization {
            org,
            visibility,
            repositories,
        } = self
        else {
            return Ok(());
        };

        validation::validate_org(org)?;
        match (visibility, repositories.is_empty()) {
            (Visibility::Selected, true) => Err(ValidationError::SelectedRequiresRepos.into()),
            (Visibility::All | Visibility::Private, false) => {
                Err(ValidationError::ReposRequireSelected.into())
            }
            _ => Ok(()),
        }
    }

    /// Public-key endpoint for this scope.
    pub fn key_path(&self) -> KeyPath {
        match self {
            Self::Repository(repo) => KeyPath::Repository(repo.clone()),
            Self::Organization { org, .. } => KeyPath::Organization(org.clone()),
        }
    }

    /// Endpoint for the named secret in this scope.
    pub fn secret_path(&self, secret: &str) -> SecretPath {
        match self {
            Self::Repository(repo) => SecretPath::Repository {
                repo: repo.clone(),
                secret: secret.to_string(),
            },
            Self::Organization { org, .. } => SecretPath::Organization {
                org: org.clone(),
                secret: secret.to_string(),
            },
        }
    }

    /// Repository names that must be resolved to ids before writing.
    pub fn selected_repositories(&self) -> Option<(&str, &[String])> {
        match self {
            Self::Organization {
                org,
                visibility: Visibility::Selected,
                repositories,
            } => Some((org.as_str(), repositories.as_slice())),
            _ => None,
        }
    }
}

impl fmt::Display for SecretScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository(repo) => write!(f, "{}", repo),
            Self::Organization { org, .. } => write!(f, "{}", org),
        }
    }
}
