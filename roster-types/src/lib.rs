//! # roster-types
//!
//! Domain and wire types for the roster sync engine.
//!
//! This crate provides the foundational types used across all roster crates:
//! - [`UserId`], [`Field`] - identity and field-key types
//! - [`User`], [`Draft`] - committed records and in-progress edits
//! - [`RemoteUser`] - the shape the remote resource serves
//! - [`ParseIdError`] - draft id parsing failure

#![warn(missing_docs)]
#![warn(clippy::all)]

mod ids;
mod record;
mod wire;

pub use ids::{Field, ParseIdError, UserId};
pub use record::{Draft, User};
pub use wire::{RemoteCompany, RemoteUser};
