//! Repository name resolution.
//!
//! Organization secrets with `selected` visibility are scoped by numeric
//! repository id, while users name repositories. All names are resolved in a
//! single GraphQL request: each name becomes an aliased `repository` field so
//! the response can be matched back per name.

use serde_json::Value;
use tracing::{debug, trace};

use crate::core::constants::GRAPHQL_NOT_FOUND;
use crate::core::transport::{GraphQlResponse, Transport};
use crate::core::types::RepositoryId;
use crate::error::{Error, ResolveError, Result, TransportError};

/// A batched lookup of repository ids under one owner.
#[derive(Debug, Clone)]
pub struct BatchQuery {
    org: String,
    /// `(alias, requested name)` in request order.
    entries: Vec<(String, String)>,
}

impl BatchQuery {
    /// Build a query for `names` under `org`. Aliases are unique per entry.
    pub fn new(org: &str, names: &[String]) -> Self {
        let entries = names
            .iter()
            .enumerate()
            .map(|(i, name)| (alias_for(i, name), name.clone()))
            .collect();
        Self {
            org: org.to_string(),
            entries,
        }
    }

    /// Aliases in request order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    /// GraphQL document text.
    pub fn query(&self) -> String {
        let owner = quote(&self.org);
        let fields: Vec<String> = self
            .entries
            .iter()
            .map(|(alias, name)| {
                format!(
                    "{}: repository(owner: {}, name: {}) {{ databaseId }}",
                    alias,
                    owner,
                    quote(name)
                )
            })
            .collect();
        format!("query MapRepositoryNames {{ {} }}", fields.join(" "))
    }

    fn name_for<'a>(&'a self, alias: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, name)| name.as_str())
            .unwrap_or(alias)
    }

    /// Turn a response into ids ordered like the request.
    ///
    /// A not-found entry in the error list wins over every other failure.
    /// Remaining errors are reported as a transport failure, and a name with
    /// no id in the data is rejected rather than defaulted.
    pub fn interpret(&self, response: GraphQlResponse) -> Result<Vec<RepositoryId>> {
        if let Some(missing) = response
            .errors
            .iter()
            .find(|e| e.kind == GRAPHQL_NOT_FOUND)
        {
            let name = match missing.alias() {
                Some(alias) => self.name_for(alias).to_string(),
                None => missing.message.clone(),
            };
            return Err(ResolveError::RepositoryNotFound {
                org: self.org.clone(),
                name,
            }
            .into());
        }

        if !response.errors.is_empty() {
            let messages: Vec<&str> = response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect();
            return Err(TransportError::GraphQl(messages.join("; ")).into());
        }

        let data = response.data.unwrap_or_default();
        self.entries
            .iter()
            .map(|(alias, name)| {
                data.get(alias)
                    .and_then(|node| node.get("databaseId"))
                    .and_then(Value::as_u64)
                    .ok_or_else(|| {
                        Error::from(ResolveError::MissingFromResponse {
                            org: self.org.clone(),
                            name: name.clone(),
                        })
                    })
            })
            .collect()
    }
}

/// Resolve repository names under `org` to ids, preserving input order.
///
/// # Errors
///
/// Returns `ResolveError::RepositoryNotFound` for the first name the platform
/// reports as missing, `ResolveError::MissingFromResponse` for a name absent
/// from an otherwise successful response, and `TransportError` otherwise.
pub fn resolve_ids<T: Transport + ?Sized>(
    transport: &T,
    org: &str,
    names: &[String],
) -> Result<Vec<RepositoryId>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let batch = BatchQuery::new(org, names);
    debug!(org, repositories = names.len(), "resolving repository ids");
    trace!(query = %batch.query(), "batched repository query");

    let response = transport.graphql(&batch.query())?;
    let ids = batch.interpret(response)?;

    debug!(?ids, "repository ids resolved");
    Ok(ids)
}

/// `r{index}_{name}` with every non-identifier character replaced by `_`.
fn alias_for(index: usize, name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("r{}_{}", index, sanitized)
}

fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
