//! Recipient public keys.
//!
//! The platform hands out a base64 X25519 key plus an opaque key id per
//! repository or organization. Secrets are sealed to that key and the id is
//! echoed back on write so the platform knows which private key to use.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::core::constants::KEY_LEN;
use crate::core::path::KeyPath;
use crate::core::transport::Transport;
use crate::error::{KeyError, Result, TransportError};

/// A decoded recipient public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    raw: [u8; KEY_LEN],
    id: String,
    encoded: String,
}

impl PublicKey {
    /// Decode a base64 key.
    ///
    /// Only the first 32 decoded bytes are kept. Shorter keys are rejected
    /// rather than zero-padded.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Decode` if the input is not base64 or decodes to
    /// fewer than 32 bytes.
    pub fn decode(encoded: &str, key_id: &str) -> Result<Self> {
        let bytes = STANDARD.decode(encoded).map_err(|e| KeyError::Decode {
            reason: format!("invalid encoding: {}", e),
        })?;

        if bytes.len() < KEY_LEN {
            return Err(KeyError::Decode {
                reason: format!("expected at least {} bytes, got {}", KEY_LEN, bytes.len()),
            }
            .into());
        }

        let mut raw = [0u8; KEY_LEN];
        raw.copy_from_slice(&bytes[..KEY_LEN]);

        Ok(Self {
            raw,
            id: key_id.to_string(),
            encoded: encoded.to_string(),
        })
    }

    /// Raw key bytes.
    pub fn raw(&self) -> &[u8; KEY_LEN] {
        &self.raw
    }

    /// Opaque key identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The base64 form exactly as received.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

/// Both fields may be absent or `null`.
#[derive(Debug, Deserialize)]
struct KeyResponse {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    key_id: Option<String>,
}

/// Fetch and decode the public key for a scope.
///
/// # Errors
///
/// Returns `KeyError::NotFound` when the response carries an empty key,
/// `TransportError` when the request or response body fails, and
/// `KeyError::Decode` when the key is malformed.
pub fn fetch_public_key<T: Transport + ?Sized>(transport: &T, path: &KeyPath) -> Result<PublicKey> {
    let path = path.to_string();
    debug!(host = transport.host(), path = %path, "fetching public key");

    let body = transport.get(&path)?;
    let response: KeyResponse =
        serde_json::from_str(&body).map_err(|e| TransportError::InvalidResponse {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    let key = response.key.unwrap_or_default();
    if key.is_empty() {
        return Err(KeyError::NotFound {
            path: format!("{}/{}", transport.host(), path),
        }
        .into());
    }

    let key = PublicKey::decode(&key, &response.key_id.unwrap_or_default())?;
    debug!(key_id = key.id(), "public key decoded");
    Ok(key)
}
