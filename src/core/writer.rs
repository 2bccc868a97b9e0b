//! Secret writes.
//!
//! Secrets are stored with a PUT, which creates the secret or replaces an
//! existing one with the same name. Repeating a write leaves the same end
//! state.

use tracing::debug;

use crate::core::path::SecretPath;
use crate::core::payload::SecretPayload;
use crate::core::transport::Transport;
use crate::error::Result;

/// Create or replace the secret at `path`.
///
/// # Errors
///
/// Returns `Error::Serialization` if the payload cannot be encoded and
/// `TransportError` if the request fails.
pub fn write<T: Transport + ?Sized>(
    transport: &T,
    path: &SecretPath,
    payload: &SecretPayload,
) -> Result<()> {
    let body = serde_json::to_string(payload)?;
    let path = path.to_string();

    debug!(
        host = transport.host(),
        path = %path,
        key_id = payload.key_id(),
        visibility = payload.visibility().map(|v| v.as_str()),
        repositories = payload.repository_ids().len(),
        "writing secret"
    );

    transport.put(&path, &body)?;
    Ok(())
}
