//! # roster-client
//!
//! Client engine keeping a local user collection in sync with a remote CRUD
//! resource.
//!
//! ## Architecture
//!
//! ```text
//! Host app → CollectionStore → UserResource → Transport → endpoint
//!                  ↓
//!            roster-core (pure validation / pagination / session)
//! ```
//!
//! The store is confirmed-only: local state changes after the endpoint
//! acknowledges an operation, never speculatively. Outcomes surface through
//! the [`Notifier`] sink; rendering is entirely the host's concern.
//!
//! ## Example
//!
//! ```ignore
//! use roster_client::{CollectionStore, HttpTransport, LogNotifier, UserResource};
//!
//! let resource = UserResource::new(HttpTransport::new("https://jsonplaceholder.typicode.com"));
//! let mut store = CollectionStore::open(resource, LogNotifier, 3).await;
//!
//! for user in store.current_view() {
//!     println!("{} {}", user.first_name, user.last_name);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod notify;
pub mod resource;
pub mod store;
pub mod transport;

pub use notify::{LogNotifier, NoteKind, Notifier};
pub use resource::{FetchError, UserResource};
pub use store::{CollectionStore, SubmitError};
pub use transport::{HttpTransport, Method, MockTransport, Transport, TransportError};
