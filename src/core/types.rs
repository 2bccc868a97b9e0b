//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name (e.g., DATABASE_URL, DEPLOY_TOKEN).
///
/// Stored upper-case by the platform.
pub type SecretName = String;

/// A sealed secret value, base64-encoded and ready for the wire.
pub type EncryptedValue = String;

/// Opaque identifier of the public key a value was sealed to.
pub type KeyId = String;

/// Numeric repository identifier assigned by the platform.
pub type RepositoryId = u64;
