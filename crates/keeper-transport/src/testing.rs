//! Scripted in-memory transport for tests.
//!
//! Responses are consumed in FIFO order across all requests. A deferred
//! response parks the request until the test settles it, which lets tests
//! drive settlement order explicitly.

use crate::{ApiRequest, HttpMethod, Transport, TransportError, TransportResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use tokio::sync::oneshot;

enum Scripted {
    Ready(TransportResult<Value>),
    Deferred(oneshot::Receiver<TransportResult<Value>>),
}

/// A request as seen by the fake, with the bearer token attached at send time.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub auth_token: Option<String>,
}

/// Transport returning scripted responses and recording every request.
#[derive(Default)]
pub struct FakeTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<RecordedRequest>>,
    auth_token: Mutex<Option<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn push_ok(&self, body: Value) {
        self.script.lock().push_back(Scripted::Ready(Ok(body)));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: TransportError) {
        self.script.lock().push_back(Scripted::Ready(Err(error)));
    }

    /// Queue a response the test settles later through the returned sender.
    pub fn push_deferred(&self) -> oneshot::Sender<TransportResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Scripted::Deferred(rx));
        tx
    }

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// The bearer token currently attached to outgoing requests.
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token.lock().clone()
    }

    /// Number of scripted responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.script.lock().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> TransportResult<Value> {
        self.requests.lock().push(RecordedRequest {
            method: request.method,
            path: request.path.clone(),
            body: request.body.clone(),
            auth_token: self.auth_token.lock().clone(),
        });

        let next = self.script.lock().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Deferred(rx)) => rx.await.unwrap_or(Err(TransportError::Timeout)),
            None => Err(TransportError::rejected(
                501,
                Some(&format!("no scripted response for {} {}", request.method, request.path)),
            )),
        }
    }

    fn set_auth_token(&self, token: Option<&str>) {
        *self.auth_token.lock() = token.map(str::to_string);
    }

    fn has_auth_token(&self) -> bool {
        self.auth_token.lock().is_some()
    }
}
