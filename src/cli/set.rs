//! Set command.
//!
//! Seals a value and stores it as a repository or organization secret.

use std::io::{self, IsTerminal, Read};

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, scope_for, Target};
use crate::core::config::{self, Config};
use crate::core::http::HttpTransport;
use crate::core::provision::{Provisioner, SecretRequest};
use crate::core::seal::SealedBox;
use crate::error::{Result, ValidationError};

/// Create or update a secret.
pub fn execute(
    config: &Config,
    name: &str,
    target: &Target,
    visibility: Option<&str>,
    repos: Vec<String>,
    body: Option<String>,
) -> Result<()> {
    let target = target.resolve(config)?;
    let scope = scope_for(target, visibility, repos, config)?;

    let value = match body {
        Some(body) => Zeroizing::new(body.into_bytes()),
        None => read_stdin(name)?,
    };
    let request = SecretRequest::new(name, scope, value.as_slice())?;

    let token = Zeroizing::new(config::token()?);
    let transport = HttpTransport::new(&config.api.host, &token, config.timeout())?;
    let provisioner = Provisioner::new(transport, SealedBox);

    info!(secret = request.name(), "setting secret");
    let receipt = provisioner.provision(&request)?;

    output::success(&format!(
        "set secret {} for {}",
        output::key(request.name()),
        output::key(&request.scope().to_string())
    ));
    if !receipt.repository_ids.is_empty() {
        output::kv("repositories:", receipt.repository_ids.len());
    }
    Ok(())
}

/// Read the whole of stdin, dropping one trailing line ending.
fn read_stdin(name: &str) -> Result<Zeroizing<Vec<u8>>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(ValidationError::MissingValue(name.to_string()).into());
    }

    let mut buf = Zeroizing::new(Vec::new());
    stdin.lock().read_to_end(&mut buf)?;
    let trimmed = trim_line_ending(&buf).len();
    buf.truncate(trimmed);
    Ok(buf)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    buf.strip_suffix(b"\r\n")
        .or_else(|| buf.strip_suffix(b"\n"))
        .unwrap_or(buf)
}
