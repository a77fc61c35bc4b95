//! HTTP client with per-instance configuration.
//!
//! Every `Client` value owns its API key, base URL, and header set. Headers
//! are never shared between instances.

use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::IntoHeaderName;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ErrorEnvelope, Result};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible API.
#[derive(Clone)]
pub struct Client {
    /// API key.
    api_key: Option<String>,

    /// API base URL.
    base_url: String,

    /// Extra headers sent with every request from this instance.
    headers: HeaderMap,

    /// HTTP client.
    http: reqwest::Client,
}

impl Client {
    /// Create a new client, reading the API key from `OPENAI_API_KEY`.
    pub fn new() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: HeaderMap::new(),
            http: reqwest::Client::new(),
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Add a header sent with every request from this client.
    pub fn with_header(mut self, name: impl IntoHeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request from this client.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Check if the client has an API key configured.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build an authenticated POST request for an API path.
    pub(crate) fn post(&self, path: &str) -> Result<reqwest::RequestBuilder> {
        let api_key = self.api_key.as_ref().ok_or(ApiError::MissingApiKey)?;
        debug!("POST {}{path}", self.base_url);
        Ok(self
            .http
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(api_key)
            .headers(self.headers.clone()))
    }

    /// POST a JSON body and decode a JSON response.
    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.post(path)?.json(body).send().await?;
        Self::decode(response).await
    }

    /// Decode a JSON response, mapping non-success statuses to `ApiError::Api`.
    pub(crate) async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        if !response.status().is_success() {
            return Err(Self::error_response(response).await);
        }
        Ok(response.json().await?)
    }

    /// Turn a non-success response into a structured error.
    pub(crate) async fn error_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => ApiError::Api {
                status,
                kind: envelope.error.kind,
                message: envelope.error.message,
                param: envelope.error.param,
                code: envelope.error.code,
            },
            Err(_) => ApiError::Api {
                status,
                kind: "invalid_error_body".to_string(),
                message: body,
                param: None,
                code: None,
            },
        }
    }

    /// Raw HTTP client, for unauthenticated fetches such as image downloads.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let client = Client::new().with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_headers_are_instance_scoped() {
        let a = Client::new().with_header("x-request-tag", HeaderValue::from_static("alpha"));
        let b = Client::new();

        assert!(a.headers().contains_key("x-request-tag"));
        assert!(!b.headers().contains_key("x-request-tag"));
    }

    #[test]
    fn test_availability_follows_api_key() {
        let client = Client::new().with_api_key("sk-test");
        assert!(client.is_available());
    }
}
