//! HTTP transport over the platform's REST and GraphQL APIs.
//!
//! Blocking `reqwest` client. `github.com` maps to `api.github.com`; any other
//! host is treated as an Enterprise Server instance under `/api/v3` and
//! `/api/graphql`.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::json;
use tracing::{debug, trace};

use crate::core::constants::{DEFAULT_HOST, USER_AGENT};
use crate::core::transport::{GraphQlResponse, Transport};
use crate::error::TransportError;

/// REST + GraphQL client bound to one host and token.
#[derive(Clone)]
pub struct HttpTransport {
    host: String,
    rest_base: String,
    graphql_url: String,
    token: String,
    client: Client,
}

impl HttpTransport {
    /// Build a transport for `host` authenticating with `token`.
    pub fn new(host: &str, token: &str, timeout: Duration) -> Result<Self, TransportError> {
        let (rest_base, graphql_url) = endpoints(host);
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        debug!(host, rest = %rest_base, "http transport ready");
        Ok(Self {
            host: host.to_string(),
            rest_base,
            graphql_url,
            token: token.to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.rest_base, path.trim_start_matches('/'))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
    }

    fn ensure_success(path: &str, response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(TransportError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("host", &self.host)
            .field("rest_base", &self.rest_base)
            .field("graphql_url", &self.graphql_url)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    fn host(&self) -> &str {
        &self.host
    }

    fn get(&self, path: &str) -> Result<String, TransportError> {
        trace!(path, "GET");
        let response = self.authorized(self.client.get(self.url(path))).send()?;
        let response = Self::ensure_success(path, response)?;
        Ok(response.text()?)
    }

    fn put(&self, path: &str, body: &str) -> Result<(), TransportError> {
        trace!(path, body_len = body.len(), "PUT");
        let response = self
            .authorized(self.client.put(self.url(path)))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()?;
        Self::ensure_success(path, response)?;
        Ok(())
    }

    fn graphql(&self, query: &str) -> Result<GraphQlResponse, TransportError> {
        trace!(query_len = query.len(), "POST graphql");
        let response = self
            .authorized(self.client.post(&self.graphql_url))
            .json(&json!({ "query": query }))
            .send()?;
        let response = Self::ensure_success("graphql", response)?;
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| TransportError::InvalidResponse {
            path: "graphql".to_string(),
            reason: e.to_string(),
        })
    }
}

/// REST base URL (with trailing slash) and GraphQL URL for a host.
fn endpoints(host: &str) -> (String, String) {
    let host = host.trim_end_matches('/');
    if host.eq_ignore_ascii_case(DEFAULT_HOST) {
        (
            "https://api.github.com/".to_string(),
            "https://api.github.com/graphql".to_string(),
        )
    } else {
        (
            format!("https://{}/api/v3/", host),
            format!("https://{}/api/graphql", host),
        )
    }
}
