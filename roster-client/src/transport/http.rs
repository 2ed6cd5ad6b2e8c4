//! HTTP transport backed by reqwest.

use super::{Method, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;

/// Transport that issues real HTTP requests against a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url` (trailing slashes stripped).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(%method, %url, "transport request");
        let response = request
            .send()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "non-success status");
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|err| TransportError::Body(err.to_string()))
    }
}
