//! Secret write payloads.
//!
//! Each scope has its own wire shape. Repository payloads never carry
//! visibility or repository ids; organization payloads always carry
//! visibility and carry ids only for `selected` visibility.

use serde::Serialize;

use crate::core::scope::{SecretScope, Visibility};
use crate::core::types::{EncryptedValue, KeyId, RepositoryId};

/// Body of a secret create-or-replace request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SecretPayload {
    Repository {
        encrypted_value: EncryptedValue,
        key_id: KeyId,
    },
    Organization {
        encrypted_value: EncryptedValue,
        key_id: KeyId,
        visibility: Visibility,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        selected_repository_ids: Vec<RepositoryId>,
    },
}

impl SecretPayload {
    /// Payload for a repository secret.
    pub fn repository(encrypted_value: impl Into<String>, key_id: impl Into<String>) -> Self {
        Self::Repository {
            encrypted_value: encrypted_value.into(),
            key_id: key_id.into(),
        }
    }

    /// Payload for an organization secret.
    ///
    /// Repository ids are dropped unless visibility is `selected`.
    pub fn organization(
        encrypted_value: impl Into<String>,
        key_id: impl Into<String>,
        visibility: Visibility,
        repository_ids: Vec<RepositoryId>,
    ) -> Self {
        let selected_repository_ids = match visibility {
            Visibility::Selected => repository_ids,
            Visibility::All | Visibility::Private => Vec::new(),
        };
        Self::Organization {
            encrypted_value: encrypted_value.into(),
            key_id: key_id.into(),
            visibility,
            selected_repository_ids,
        }
    }

    /// Payload matching `scope`. `repository_ids` only matter for
    /// organization scopes with `selected` visibility.
    pub fn for_scope(
        scope: &SecretScope,
        encrypted_value: impl Into<String>,
        key_id: impl Into<String>,
        repository_ids: Vec<RepositoryId>,
    ) -> Self {
        match scope {
            SecretScope::Repository(_) => Self::repository(encrypted_value, key_id),
            SecretScope::Organization { visibility, .. } => {
                Self::organization(encrypted_value, key_id, *visibility, repository_ids)
            }
        }
    }

    pub fn encrypted_value(&self) -> &str {
        match self {
            Self::Repository {
                encrypted_value, ..
            }
            | Self::Organization {
                encrypted_value, ..
            } => encrypted_value,
        }
    }

    pub fn key_id(&self) -> &str {
        match self {
            Self::Repository { key_id, .. } | Self::Organization { key_id, .. } => key_id,
        }
    }

    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            Self::Repository { .. } => None,
            Self::Organization { visibility, .. } => Some(*visibility),
        }
    }

    pub fn repository_ids(&self) -> &[RepositoryId] {
        match self {
            Self::Repository { .. } => &[],
            Self::Organization {
                selected_repository_ids,
                ..
            } => selected_repository_ids,
        }
    }
}
