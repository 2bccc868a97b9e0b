//! In-memory platform fake.
//!
//! `FakeHub` serves public keys, answers batched repository queries, and
//! stores secrets with upsert semantics, recording every call.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::SecretKey;
use serde_json::{json, Map, Value};

use actseal::core::key::PublicKey;
use actseal::core::seal::Sealer;
use actseal::core::transport::{GraphQlError, GraphQlResponse, Transport};
use actseal::error::{Result, TransportError};

pub const KEY_ID: &str = "568250167242549743";

/// Scripted platform state.
pub struct FakeHub {
    keys: HashMap<String, String>,
    repos: HashMap<(String, String), u64>,
    /// Aliases silently left out of GraphQL data.
    pub drop_aliases: Vec<String>,
    /// Fail every GraphQL call at the transport level.
    pub graphql_down: bool,
    /// Answer unknown key paths with `"key": null` instead of `""`.
    pub null_keys: bool,
    pub secrets: RefCell<BTreeMap<String, Value>>,
    pub calls: RefCell<Vec<String>>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeHub {
    pub fn new() -> Self {
        Self {
            keys: HashMap::new(),
            repos: HashMap::new(),
            drop_aliases: Vec::new(),
            graphql_down: false,
            null_keys: false,
            secrets: RefCell::new(BTreeMap::new()),
            calls: RefCell::new(Vec::new()),
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Serve `key` (base64) at a public-key path.
    pub fn with_key(mut self, key_path: &str, key: &str) -> Self {
        self.keys.insert(key_path.to_string(), key.to_string());
        self
    }

    /// Register a repository id.
    pub fn with_repo(mut self, org: &str, name: &str, id: u64) -> Self {
        self.repos.insert((org.to_string(), name.to_string()), id);
        self
    }

    pub fn stored(&self, path: &str) -> Option<Value> {
        self.secrets.borrow().get(path).cloned()
    }

    pub fn writes(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with("PUT "))
            .count()
    }
}

impl Transport for FakeHub {
    fn host(&self) -> &str {
        "github.com"
    }

    fn get(&self, path: &str) -> std::result::Result<String, TransportError> {
        self.calls.borrow_mut().push(format!("GET {path}"));
        if !path.ends_with("/public-key") {
            return Err(TransportError::Status {
                path: path.to_string(),
                status: 404,
                body: "Not Found".to_string(),
            });
        }
        let key = match self.keys.get(path) {
            Some(key) => Value::String(key.clone()),
            None if self.null_keys => Value::Null,
            None => Value::String(String::new()),
        };
        Ok(json!({ "key_id": KEY_ID, "key": key }).to_string())
    }

    fn put(&self, path: &str, body: &str) -> std::result::Result<(), TransportError> {
        self.calls.borrow_mut().push(format!("PUT {path}"));
        let value: Value =
            serde_json::from_str(body).map_err(|e| TransportError::InvalidResponse {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        self.secrets.borrow_mut().insert(path.to_string(), value);
        Ok(())
    }

    fn graphql(&self, query: &str) -> std::result::Result<GraphQlResponse, TransportError> {
        self.calls.borrow_mut().push("POST graphql".to_string());
        self.queries.borrow_mut().push(query.to_string());
        if self.graphql_down {
            return Err(TransportError::Status {
                path: "graphql".to_string(),
                status: 502,
                body: "Bad Gateway".to_string(),
            });
        }

        let mut data = Map::new();
        let mut errors = Vec::new();
        for (alias, owner, name) in parse_fields(query) {
            if self.drop_aliases.contains(&alias) {
                continue;
            }
            match self.repos.get(&(owner.clone(), name.clone())) {
                Some(id) => {
                    data.insert(alias, json!({ "databaseId": id }));
                }
                None => {
                    data.insert(alias.clone(), Value::Null);
                    errors.push(GraphQlError {
                        kind: "NOT_FOUND".to_string(),
                        message: format!(
                            "Could not resolve to a Repository with the name '{owner}/{name}'."
                        ),
                        path: vec![Value::String(alias)],
                    });
                }
            }
        }

        Ok(GraphQlResponse {
            data: Some(data),
            errors,
        })
    }
}

/// Extract `(alias, owner, name)` from a batched repository query.
fn parse_fields(query: &str) -> Vec<(String, String, String)> {
    let start = query.find('{').map(|i| i + 1).unwrap_or(0);
    let end = query.rfind('}').unwrap_or(query.len());
    query[start..end]
        .split("{ databaseId }")
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .filter_map(|field| {
            let (alias, rest) = field.split_once(':')?;
            let owner = between(rest, "owner: \"", "\"")?;
            let name = between(rest, "name: \"", "\"")?;
            Some((alias.trim().to_string(), owner, name))
        })
        .collect()
}

fn between(s: &str, open: &str, close: &str) -> Option<String> {
    let from = s.find(open)? + open.len();
    let len = s[from..].find(close)?;
    Some(s[from..from + len].to_string())
}

/// A real X25519 keypair with its base64 public half.
pub fn keypair() -> (String, SecretKey) {
    let mut rng = crypto_box::aead::OsRng;
    let secret = SecretKey::generate(&mut rng);
    (STANDARD.encode(secret.public_key().as_bytes()), secret)
}

/// Deterministic sealer: `key_id:plaintext`, so identical inputs give
/// identical payloads.
pub struct Tagged;

impl Sealer for Tagged {
    fn seal(&self, plaintext: &[u8], key: &PublicKey) -> Result<Vec<u8>> {
        let mut out = format!("{}:", key.id()).into_bytes();
        out.extend_from_slice(plaintext);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "tagged"
    }
}

/// Decode a `Tagged` encrypted value back to text.
pub fn untag(encrypted_value: &Value) -> String {
    let bytes = STANDARD
        .decode(encrypted_value.as_str().expect("encrypted_value is a string"))
        .expect("encrypted_value is base64");
    String::from_utf8(bytes).expect("tagged value is utf-8")
}
