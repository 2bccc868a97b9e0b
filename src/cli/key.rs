//! Key command.
//!
//! Prints the public key secrets for a repository or organization are
//! sealed to.

use zeroize::Zeroizing;

use crate::cli::{output, ResolvedTarget, Target};
use crate::core::config::{self, Config};
use crate::core::http::HttpTransport;
use crate::core::key::fetch_public_key;
use crate::core::path::KeyPath;
use crate::error::Result;

/// Show the public key for a target.
pub fn execute(config: &Config, target: &Target) -> Result<()> {
    let path = match target.resolve(config)? {
        ResolvedTarget::Repository(repo) => KeyPath::Repository(repo),
        ResolvedTarget::Organization(org) => KeyPath::Organization(org),
    };

    let token = Zeroizing::new(config::token()?);
    let transport = HttpTransport::new(&config.api.host, &token, config.timeout())?;
    let key = fetch_public_key(&transport, &path)?;

    output::kv("key id:", key.id());
    output::kv("key:   ", key);
    Ok(())
}
