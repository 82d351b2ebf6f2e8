//! HTTP client layer
//!
//! [`HttpClient`] abstracts the transport so the typed API clients can run
//! against the real order service ([`NetworkHttpClient`]) or an in-process
//! mock in tests. Envelope unwrapping lives here: every endpoint returns
//! `{ success, data?, error? }` and callers only ever see the payload or a
//! [`ClientError`].

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::response::ApiResponse;

/// Request timeout for order-service calls
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// Install or clear the bearer token sent with subsequent requests
    fn set_token(&mut self, token: Option<String>);
    fn token(&self) -> Option<&str>;
}

/// Unwrap the service envelope, mapping failures onto the error taxonomy
pub(crate) fn unwrap_envelope<T>(resp: ApiResponse<T>) -> ClientResult<T> {
    if !resp.success {
        let (message, code) = match resp.error {
            Some(body) => (body.message, body.code),
            None => ("Unknown service error".to_string(), None),
        };
        match code.as_deref() {
            Some("NOT_FOUND") => return Err(ClientError::NotFound(message)),
            Some("UNAUTHORIZED") | Some("TOKEN_EXPIRED") | Some("FORBIDDEN") => {
                return Err(ClientError::Auth(message));
            }
            Some("VALIDATION") => return Err(ClientError::Validation(message)),
            _ => {}
        }
        return Err(ClientError::Remote { code, message });
    }
    resp.data
        .ok_or_else(|| ClientError::InvalidResponse("Missing data in successful response".into()))
}

/// Network HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        // The service wraps errors in the envelope even on non-2xx statuses;
        // prefer the envelope message when it parses.
        if let Ok(envelope) = serde_json::from_str::<ApiResponse<T>>(&text) {
            return unwrap_envelope(envelope);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Auth("Authentication required".into())),
            StatusCode::FORBIDDEN => Err(ClientError::Auth(text)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            _ => Err(ClientError::InvalidResponse(format!(
                "Unexpected response ({}): {}",
                status, text
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.put(&url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.delete(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
