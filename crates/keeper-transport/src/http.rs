//! reqwest-backed transport.

use crate::normalize::extract_server_message;
use crate::{ApiRequest, HttpMethod, Transport, TransportError, TransportResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Transport talking JSON over HTTP to the contacts API.
pub struct HttpTransport {
    http_client: reqwest::Client,
    base_url: Url,
    auth_token: RwLock<Option<String>>,
}

impl HttpTransport {
    /// Create a transport for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> TransportResult<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            auth_token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> TransportResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn map_send_error(e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::NetworkUnavailable
        } else {
            TransportError::Http(e)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> TransportResult<Value> {
        let url = self.url(&request.path)?;

        let mut builder = match request.method {
            HttpMethod::Get => self.http_client.get(url),
            HttpMethod::Post => self.http_client.post(url),
            HttpMethod::Put => self.http_client.put(url),
            HttpMethod::Delete => self.http_client.delete(url),
        }
        .header(ACCEPT, "application/json");

        let token = self.auth_token.read().clone();
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        debug!(method = %request.method, path = %request.path, "Sending API request");

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status();
        let body = response.text().await.map_err(Self::map_send_error)?;

        if !status.is_success() {
            let server_message = extract_server_message(&body);
            warn!(
                method = %request.method,
                path = %request.path,
                status = %status,
                has_server_message = server_message.is_some(),
                "API request rejected"
            );
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                server_message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn set_auth_token(&self, token: Option<&str>) {
        *self.auth_token.write() = token.map(str::to_string);
    }

    fn has_auth_token(&self) -> bool {
        self.auth_token.read().is_some()
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("has_auth_token", &self.has_auth_token())
            .finish()
    }
}
