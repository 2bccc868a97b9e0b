//! Command-line interface.

pub mod completions;
pub mod key;
pub mod output;
pub mod set;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::core::config::Config;
use crate::core::path::Repo;
use crate::core::scope::{SecretScope, Visibility};
use crate::core::validation;
use crate::error::{Result, ValidationError};

/// actseal - Provision sealed CI secrets.
#[derive(Parser)]
#[command(
    name = "actseal",
    about = "Provision sealed CI secrets for repositories and organizations",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Platform host (github.com or an Enterprise Server hostname)
    #[arg(long, global = true, env = "ACTSEAL_HOST")]
    pub host: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create or update a secret
    Set {
        /// Secret name (e.g., DEPLOY_TOKEN)
        name: String,

        #[command(flatten)]
        target: Target,

        /// Organization secret visibility: all, private, or selected
        #[arg(long)]
        visibility: Option<String>,

        /// Repositories that may read a `selected` organization secret
        #[arg(short = 'r', long, value_delimiter = ',')]
        repos: Vec<String>,

        /// Secret value (read from stdin if omitted)
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Show the public key secrets are sealed to
    Key {
        #[command(flatten)]
        target: Target,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where a secret lives.
#[derive(Args, Debug, Clone, Default)]
pub struct Target {
    /// Repository in OWNER/NAME form
    #[arg(short = 'R', long, conflicts_with = "org")]
    pub repo: Option<String>,

    /// Organization name
    #[arg(short, long)]
    pub org: Option<String>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// The resolved target of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    Repository(Repo),
    Organization(String),
}

impl Target {
    /// Resolve against config defaults.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a malformed repository or organization,
    /// or when no target is given and the config has no default organization.
    pub fn resolve(&self, config: &Config) -> Result<ResolvedTarget> {
        if let Some(repo) = &self.repo {
            return Ok(ResolvedTarget::Repository(repo.parse()?));
        }
        match self.org.as_ref().or(config.defaults.org.as_ref()) {
            Some(org) if !org.is_empty() => {
                validation::validate_org(org)?;
                Ok(ResolvedTarget::Organization(org.clone()))
            }
            _ => Err(ValidationError::MissingTarget.into()),
        }
    }
}

/// Build the secret scope for `set` from its arguments.
pub fn scope_for(
    target: ResolvedTarget,
    visibility: Option<&str>,
    repos: Vec<String>,
    config: &Config,
) -> Result<SecretScope> {
    match target {
        ResolvedTarget::Repository(repo) => {
            if visibility.is_some() || !repos.is_empty() {
                return Err(ValidationError::OrgOnlyOption.into());
            }
            Ok(SecretScope::repository(repo))
        }
        ResolvedTarget::Organization(org) => {
            let visibility = match visibility {
                Some(v) => v.parse::<Visibility>()?,
                None if !repos.is_empty() => Visibility::Selected,
                None => config.default_visibility(),
            };
            SecretScope::organization(org, visibility, repos)
        }
    }
}

/// Execute a parsed command line.
///
/// # Errors
///
/// Returns error if the command execution fails.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Set {
            name,
            target,
            visibility,
            repos,
            body,
        } => {
            let config = load_config(cli.host)?;
            set::execute(&config, &name, &target, visibility.as_deref(), repos, body)
        }
        Command::Key { target } => key::execute(&load_config(cli.host)?, &target),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Load the config file and apply the `--host` override.
fn load_config(host: Option<String>) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(host) = host {
        config.api.host = host;
        config.validate()?;
    }
    debug!(host = %config.api.host, "config resolved");
    Ok(config)
}
