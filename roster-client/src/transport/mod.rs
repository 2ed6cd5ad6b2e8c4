//! Transport abstraction for the roster engine.
//!
//! The engine never talks HTTP directly; every remote effect goes through
//! [`Transport`], a minimal method/path/JSON-body interface.
//!
//! # Design
//!
//! One request, one JSON response:
//! - `request()` performs a single call and decodes the body
//! - non-success statuses and connection failures surface as [`TransportError`]
//! - implementations must return `Err` rather than panic on any failure
//!
//! # Example
//!
//! ```ignore
//! let transport = MockTransport::new();
//! transport.queue_ok(serde_json::json!([]));
//! let body = transport.request(Method::Get, "/users", None).await?;
//! ```

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{MockTransport, SentRequest};

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Request method for a transport call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Retrieve a resource.
    Get,
    /// Create a resource.
    Post,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// The wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport errors.
///
/// The engine treats these as opaque: any variant means the attempt failed
/// and may be retried by the user, nothing more.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request never completed (connection, DNS, timeout).
    #[error("request failed: {0}")]
    Request(String),
    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Body(String),
}

/// Abstract JSON request boundary.
///
/// `path` is endpoint-relative (`/users`, `/users/7`). A `body` is sent as
/// JSON when present; an empty response body decodes to `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and return the decoded JSON response body.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}
