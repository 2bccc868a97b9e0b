//! actseal - Provision sealed CI secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use actseal::cli::output;
use actseal::cli::{execute, Cli};
use actseal::core::constants::LOG_ENV;
use actseal::error::{ConfigError, Error, KeyError, ResolveError, TransportError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("actseal=debug")
        } else {
            EnvFilter::new("actseal=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e.root() {
        Error::Config(ConfigError::MissingToken) => {
            Some("set ACTSEAL_TOKEN, GH_TOKEN, or GITHUB_TOKEN")
        }
        Error::Key(KeyError::NotFound { .. }) => {
            Some("check the target exists and the token can read its secrets")
        }
        Error::Resolve(ResolveError::RepositoryNotFound { .. }) => {
            Some("pass repository names without the owner, as listed in the organization")
        }
        Error::Transport(TransportError::Status { status: 401, .. }) => {
            Some("the token was rejected; check that it is valid")
        }
        Error::Transport(TransportError::Status { status: 403 | 404, .. }) => {
            Some("the token may lack admin access to this target")
        }
        _ => None,
    }
}
