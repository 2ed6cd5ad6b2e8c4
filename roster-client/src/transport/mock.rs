//! Mock transport for testing.
//!
//! Allows queueing responses and capturing requests for verification.

use super::{Method, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request captured by the mock, for later assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    /// The request method.
    pub method: Method,
    /// The endpoint-relative path.
    pub path: String,
    /// The JSON body, when one was sent.
    pub body: Option<Value>,
}

/// Mock transport for testing.
///
/// Responses are consumed in FIFO order, one per request; a request with
/// nothing queued fails. Clones share state.
#[derive(Debug, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Debug, Default)]
struct MockTransportInner {
    responses: VecDeque<Result<Value, TransportError>>,
    requests: Vec<SentRequest>,
}

impl MockTransport {
    /// Create a new mock transport with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON value to be returned by the next request.
    pub fn queue_ok(&self, value: Value) {
        let mut inner = self.inner.lock().unwrap();
        inner.responses.push_back(Ok(value));
    }

    /// Queue a failure for the next request.
    pub fn queue_err(&self, error: TransportError) {
        let mut inner = self.inner.lock().unwrap();
        inner.responses.push_back(Err(error));
    }

    /// All requests performed so far.
    pub fn requests(&self) -> Vec<SentRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<SentRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.last().cloned()
    }

    /// Clear captured requests and queued responses.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        *inner = MockTransportInner::default();
    }
}

impl Clone for MockTransport {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(SentRequest {
            method,
            path: path.to_string(),
            body,
        });
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no response queued".to_string())))
    }
}
