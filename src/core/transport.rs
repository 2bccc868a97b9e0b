//! Transport abstraction.
//!
//! The core never talks HTTP directly. It issues REST reads and writes and
//! GraphQL queries through this trait, so the network layer can be swapped
//! for a fake in tests.
//!
//! ## Adding a New Transport
//!
//! 1. Implement the `Transport` trait
//! 2. Map network, auth, and server failures to `TransportError`
//! 3. Return GraphQL responses that carry an `errors` list as `Ok`, so the
//!    resolver can classify per-name failures

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::TransportError;

/// One entry of a GraphQL `errors` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphQlError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub path: Vec<Value>,
}

impl GraphQlError {
    /// First path segment, if it is a field name (an alias for batched queries).
    pub fn alias(&self) -> Option<&str> {
        self.path.first().and_then(Value::as_str)
    }
}

/// A decoded GraphQL response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// Request/response channel to the platform API.
///
/// Paths are relative to the REST API root (e.g. `repos/o/r/actions/secrets/X`).
pub trait Transport {
    /// Host the transport talks to, used in diagnostics.
    fn host(&self) -> &str;

    /// GET a path and return the response body.
    fn get(&self, path: &str) -> Result<String, TransportError>;

    /// PUT a JSON body to a path. The response body is discarded.
    fn put(&self, path: &str, body: &str) -> Result<(), TransportError>;

    /// Run a GraphQL query.
    fn graphql(&self, query: &str) -> Result<GraphQlResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn host(&self) -> &str {
        (**self).host()
    }

    fn get(&self, path: &str) -> Result<String, TransportError> {
        (**self).get(path)
    }

    fn put(&self, path: &str, body: &str) -> Result<(), TransportError> {
        (**self).put(path, body)
    }

    fn graphql(&self, query: &str) -> Result<GraphQlResponse, TransportError> {
        (**self).graphql(query)
    }
}
