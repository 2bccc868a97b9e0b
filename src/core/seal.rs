//! Secret sealing.
//!
//! Values are encrypted to the scope's public key before they leave the
//! machine. The platform expects libsodium anonymous sealed boxes
//! (X25519 + XSalsa20-Poly1305), which `SealedBox` produces.
//!
//! ## Adding a New Sealer
//!
//! 1. Implement the `Sealer` trait
//! 2. Hand it to `Provisioner::new`

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use crate::core::key::PublicKey;
use crate::core::types::EncryptedValue;
use crate::error::{CipherError, Result};

/// Encrypts plaintext to a recipient public key.
pub trait Sealer {
    /// Seal `plaintext` so only the holder of the matching private key can
    /// open it.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn seal(&self, plaintext: &[u8], key: &PublicKey) -> Result<Vec<u8>>;

    /// Sealer name for logs.
    fn name(&self) -> &'static str;
}

/// libsodium-compatible anonymous sealed box.
#[derive(Debug, Default, Clone, Copy)]
pub struct SealedBox;

impl Sealer for SealedBox {
    fn seal(&self, plaintext: &[u8], key: &PublicKey) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), key_id = key.id(), "sealing");

        let recipient = crypto_box::PublicKey::from(*key.raw());
        let mut rng = crypto_box::aead::OsRng;
        let sealed = recipient
            .seal(&mut rng, plaintext)
            .map_err(|e| CipherError::SealFailed(e.to_string()))?;

        trace!(ciphertext_len = sealed.len(), "sealed");
        Ok(sealed)
    }

    fn name(&self) -> &'static str {
        "sealed-box"
    }
}

/// Seal and base64-encode a value for the wire.
pub fn seal_value<S: Sealer + ?Sized>(
    sealer: &S,
    plaintext: &[u8],
    key: &PublicKey,
) -> Result<EncryptedValue> {
    let sealed = sealer.seal(plaintext, key)?;
    Ok(STANDARD.encode(sealed))
}
