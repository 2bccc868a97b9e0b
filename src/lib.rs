//! actseal - Provision sealed CI secrets into repository and organization
//! secret stores.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── set           # Create or update a secret
//! │   ├── key           # Show a scope's public key
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── key           # Public key decoding and retrieval
//!     ├── resolve       # Batched repository name -> id lookup
//!     ├── payload       # Scope-specific write payloads
//!     ├── writer        # Idempotent secret write
//!     ├── provision     # End-to-end orchestration
//!     ├── seal          # Sealer trait + sealed box
//!     ├── transport     # Transport trait
//!     ├── http          # reqwest transport
//!     └── config        # config.toml + token lookup
//! ```
//!
//! # Example
//!
//! ```no_run
//! use actseal::core::http::HttpTransport;
//! use actseal::core::provision::{Provisioner, SecretRequest};
//! use actseal::core::scope::{SecretScope, Visibility};
//! use actseal::core::seal::SealedBox;
//! use std::time::Duration;
//!
//! # fn main() -> actseal::error::Result<()> {
//! let transport = HttpTransport::new("github.com", "ghp_example", Duration::from_secs(30))?;
//! let provisioner = Provisioner::new(transport, SealedBox);
//!
//! let scope = SecretScope::organization("octo", Visibility::Selected, vec!["api".into()])?;
//! let request = SecretRequest::new("DEPLOY_TOKEN", scope, "s3cr3t")?;
//! provisioner.provision(&request)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
