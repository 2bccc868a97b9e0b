//! Secret provisioning.
//!
//! Runs one secret write end to end:
//!
//! ```text
//! fetch key -> [resolve repositories] -> seal -> build payload -> write
//! ```
//!
//! Repository resolution only runs for organization secrets with `selected`
//! visibility. The first failure ends the run; nothing is retried and no
//! write happens unless every earlier stage succeeded.

use std::fmt;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::key::{fetch_public_key, PublicKey};
use crate::core::path::SecretPath;
use crate::core::payload::SecretPayload;
use crate::core::resolve::resolve_ids;
use crate::core::scope::SecretScope;
use crate::core::seal::{seal_value, Sealer};
use crate::core::transport::Transport;
use crate::core::types::{KeyId, RepositoryId, SecretName};
use crate::core::validation;
use crate::core::writer;
use crate::error::{Error, Result};

/// Provisioning stage, reported on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchKey,
    ResolveRepositories,
    Seal,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FetchKey => "failed to fetch public key",
            Self::ResolveRepositories => "failed to look up IDs",
            Self::Seal => "failed to encrypt value",
            Self::Write => "failed to write secret",
        };
        f.write_str(s)
    }
}

/// A validated request to store one secret.
pub struct SecretRequest {
    name: SecretName,
    scope: SecretScope,
    value: Zeroizing<Vec<u8>>,
}

impl SecretRequest {
    /// Build a request. The name is upper-cased, as the platform stores it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an invalid name, an invalid scope, or an
    /// empty value.
    pub fn new(name: &str, scope: SecretScope, value: impl Into<Vec<u8>>) -> Result<Self> {
        validation::validate_name(name)?;
        scope.validate()?;
        let value = Zeroizing::new(value.into());
        validation::validate_value(name, &value)?;

        Ok(Self {
            name: name.to_ascii_uppercase(),
            scope,
            value,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &SecretScope {
        &self.scope
    }
}

impl fmt::Debug for SecretRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretRequest")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub path: SecretPath,
    pub key_id: KeyId,
    pub repository_ids: Vec<RepositoryId>,
}

/// Composes key retrieval, name resolution, sealing, and the write.
pub struct Provisioner<T, S> {
    transport: T,
    sealer: S,
}

impl<T: Transport, S: Sealer> Provisioner<T, S> {
    pub fn new(transport: T, sealer: S) -> Self {
        Self { transport, sealer }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the public key for a scope.
    pub fn public_key(&self, scope: &SecretScope) -> Result<PublicKey> {
        let path = scope.key_path();
        fetch_public_key(&self.transport, &path)
            .map_err(|e| wrap(Stage::FetchKey, scope.to_string(), e))
    }

    /// Store one secret.
    ///
    /// # Errors
    ///
    /// Returns `Error::Provision` naming the failed stage; the underlying
    /// error is available through `Error::root`.
    pub fn provision(&self, request: &SecretRequest) -> Result<Receipt> {
        let scope = request.scope();
        info!(
            secret = request.name(),
            scope = %scope,
            sealer = self.sealer.name(),
            "provisioning secret"
        );

        let key = self.public_key(scope)?;

        let repository_ids = match scope.selected_repositories() {
            Some((org, names)) => resolve_ids(&self.transport, org, names).map_err(|e| {
                wrap(
                    Stage::ResolveRepositories,
                    format!("repositories {} in {}", names.join(", "), org),
                    e,
                )
            })?,
            None => Vec::new(),
        };

        let encrypted = seal_value(&self.sealer, &request.value, &key)
            .map_err(|e| wrap(Stage::Seal, request.name().to_string(), e))?;

        let payload =
            SecretPayload::for_scope(scope, encrypted, key.id(), repository_ids.clone());
        let path = scope.secret_path(request.name());

        writer::write(&self.transport, &path, &payload)
            .map_err(|e| wrap(Stage::Write, path.to_string(), e))?;

        debug!(path = %path, key_id = key.id(), "secret written");
        Ok(Receipt {
            path,
            key_id: key.id().to_string(),
            repository_ids,
        })
    }
}

fn wrap(stage: Stage, context: String, source: Error) -> Error {
    Error::Provision {
        stage,
        context,
        source: Box::new(source),
    }
}
