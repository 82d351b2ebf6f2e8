//! In-process mock of the order service
//!
//! Implements [`HttpClient`] over a queue of canned envelope responses so
//! session and API flows can be exercised without a network. Each canned
//! response is a full `{ success, data?, error? }` envelope, letting tests
//! script failures exactly as the service would report them.

use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, unwrap_envelope};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::response::ApiResponse;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// A request observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    /// JSON body, `Value::Null` for body-less requests
    pub body: Value,
    /// Bearer token attached at the time of the call
    pub token: Option<String>,
}

/// Scriptable in-process [`HttpClient`]
#[derive(Debug, Default)]
pub struct MockHttpClient {
    responses: Mutex<HashMap<String, VecDeque<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    token: Option<String>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an envelope for `method path`; responses pop in FIFO order
    pub fn enqueue(&self, method: &str, path: &str, envelope: Value) {
        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .entry(Self::key(method, path))
            .or_default()
            .push_back(envelope);
    }

    /// Queue a successful envelope wrapping `data`
    pub fn enqueue_ok(&self, method: &str, path: &str, data: impl serde::Serialize) {
        let data = serde_json::to_value(data).expect("mock data must serialize");
        self.enqueue(
            method,
            path,
            serde_json::json!({ "success": true, "data": data }),
        );
    }

    /// Queue a failed envelope with a message and optional code
    pub fn enqueue_error(&self, method: &str, path: &str, message: &str, code: Option<&str>) {
        let mut error = serde_json::json!({ "message": message });
        if let Some(code) = code {
            error["code"] = Value::String(code.to_string());
        }
        self.enqueue(
            method,
            path,
            serde_json::json!({ "success": false, "error": error }),
        );
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .clone()
    }

    fn key(method: &str, path: &str) -> String {
        format!("{} {}", method, path)
    }

    fn record(&self, method: &'static str, path: &str, body: Value) {
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                body,
                token: self.token.clone(),
            });
    }

    fn respond<T: DeserializeOwned>(&self, method: &'static str, path: &str) -> ClientResult<T> {
        let envelope = self
            .responses
            .lock()
            .expect("mock responses lock poisoned")
            .get_mut(&Self::key(method, path))
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| {
                ClientError::InvalidResponse(format!("No canned response for {} {}", method, path))
            })?;
        let parsed: ApiResponse<T> = serde_json::from_value(envelope)?;
        unwrap_envelope(parsed)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("GET", path, Value::Null);
        self.respond("GET", path)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.record("POST", path, body);
        self.respond("POST", path)
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("POST", path, Value::Null);
        self.respond("POST", path)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.record("PUT", path, body);
        self.respond("PUT", path)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("DELETE", path, Value::Null);
        self.respond("DELETE", path)
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
