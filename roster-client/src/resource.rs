//! Typed client for the remote `/users` resource.
//!
//! Each call maps the external representation into [`User`] and folds every
//! transport or decode problem into an opaque [`FetchError`]. Nothing here
//! touches local state - the collection store owns that.

use crate::transport::{Method, Transport, TransportError};
use roster_types::{Draft, RemoteUser, User, UserId};
use thiserror::Error;

/// Opaque failure of a remote operation.
///
/// The cause is carried for logging but deliberately not interpreted:
/// callers only branch on success vs failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport rejected the request.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response decoded to an unexpected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Client for the remote user resource.
#[derive(Debug, Clone)]
pub struct UserResource<T> {
    transport: T,
}

impl<T: Transport> UserResource<T> {
    /// Create a resource client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch all remote records, mapped into the local shape.
    pub async fn list(&self) -> Result<Vec<User>, FetchError> {
        let body = self.transport.request(Method::Get, "/users", None).await?;
        let remote: Vec<RemoteUser> =
            serde_json::from_value(body).map_err(|err| FetchError::Decode(err.to_string()))?;
        Ok(remote.into_iter().map(User::from).collect())
    }

    /// Create a remote record from the draft.
    ///
    /// The committed record keeps `id`, the id the caller chose on the form;
    /// the id the endpoint assigns in its response is discarded. Observed
    /// behavior of the product this engine replaces, kept as-is.
    pub async fn create(&self, draft: &Draft, id: UserId) -> Result<User, FetchError> {
        let body =
            serde_json::to_value(draft).map_err(|err| FetchError::Decode(err.to_string()))?;
        self.transport
            .request(Method::Post, "/users", Some(body))
            .await?;
        tracing::debug!(%id, "create confirmed");
        Ok(draft.to_user(id))
    }

    /// Overwrite the remote record at `id` with the draft's fields.
    ///
    /// On success the caller replaces the local record with the returned
    /// one; the id stays the original no matter what the draft's id text
    /// holds.
    pub async fn update(&self, id: UserId, draft: &Draft) -> Result<User, FetchError> {
        let body =
            serde_json::to_value(draft).map_err(|err| FetchError::Decode(err.to_string()))?;
        self.transport
            .request(Method::Put, &format!("/users/{id}"), Some(body))
            .await?;
        tracing::debug!(%id, "update confirmed");
        Ok(draft.to_user(id))
    }

    /// Delete the remote record at `id`.
    pub async fn remove(&self, id: UserId) -> Result<UserId, FetchError> {
        self.transport
            .request(Method::Delete, &format!("/users/{id}"), None)
            .await?;
        tracing::debug!(%id, "delete confirmed");
        Ok(id)
    }
}
