//! Core library components.
//!
//! Key retrieval, repository name resolution, payload construction, and the
//! secret write, plus the collaborators they run through.

pub mod config;
pub mod constants;
pub mod http;
pub mod key;
pub mod path;
pub mod payload;
pub mod provision;
pub mod resolve;
pub mod scope;
pub mod seal;
pub mod transport;
pub mod types;
pub mod validation;
pub mod writer;
