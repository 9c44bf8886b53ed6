//! The transport trait seam.

use crate::TransportResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// HTTP methods used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A single API call: method, path relative to the API base, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

/// Process-wide API transport.
///
/// Implementations own the default `Authorization` header: once
/// [`set_auth_token`](Transport::set_auth_token) is called, every later
/// request carries `Bearer <token>` until it is cleared.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request and return the decoded JSON success body
    /// (`Value::Null` for an empty body).
    async fn send(&self, request: ApiRequest) -> TransportResult<Value>;

    /// Set or clear the default bearer token.
    fn set_auth_token(&self, token: Option<&str>);

    /// Whether a bearer token is currently attached to outgoing requests.
    fn has_auth_token(&self) -> bool;

    async fn get(&self, path: &str) -> TransportResult<Value> {
        self.send(ApiRequest {
            method: HttpMethod::Get,
            path: path.to_string(),
            body: None,
        })
        .await
    }

    async fn post(&self, path: &str, body: Value) -> TransportResult<Value> {
        self.send(ApiRequest {
            method: HttpMethod::Post,
            path: path.to_string(),
            body: Some(body),
        })
        .await
    }

    async fn put(&self, path: &str, body: Value) -> TransportResult<Value> {
        self.send(ApiRequest {
            method: HttpMethod::Put,
            path: path.to_string(),
            body: Some(body),
        })
        .await
    }

    async fn delete(&self, path: &str) -> TransportResult<Value> {
        self.send(ApiRequest {
            method: HttpMethod::Delete,
            path: path.to_string(),
            body: None,
        })
        .await
    }
}

/// Decode a success body into a typed value.
pub fn decode<T: DeserializeOwned>(value: Value) -> TransportResult<T> {
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransportError;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Token {
        token: String,
    }

    #[test]
    fn test_decode_typed_body() {
        let token: Token = decode(serde_json::json!({"token": "abc"})).unwrap();
        assert_eq!(token.token, "abc");
    }

    #[test]
    fn test_decode_mismatch_is_decode_error() {
        let result: TransportResult<Token> = decode(serde_json::json!({"msg": "ok"}));
        assert!(matches!(result, Err(TransportError::Decode(_))));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
