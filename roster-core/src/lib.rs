//! # roster-core
//!
//! Pure logic for the roster engine (no I/O, instant tests).
//!
//! This crate implements validation, pagination and the edit-session state
//! machine without any network I/O, enabling fast unit tests.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce
//! output without side effects. This enables:
//! - Instant unit tests (no mocks, no async)
//! - Deterministic behavior (same input → same output)
//! - Easy reasoning about state transitions
//!
//! The actual I/O (remote calls, notifications) is performed by
//! `roster-client`, which drives these types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pager;
pub mod session;
pub mod validate;

pub use pager::{Pager, DEFAULT_PAGE_SIZE};
pub use session::{Mode, Session, SessionError};
pub use validate::{validate, ValidationErrors};
