//! Identity and field-key types for the roster engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A unique, non-negative identifier for a user record.
///
/// Ids are chosen by the caller on create and never change afterwards.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Create a UserId from a raw value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value of this UserId.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

/// Error returned when draft id text cannot be parsed as a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user id: {input:?}")]
pub struct ParseIdError {
    /// The text that failed to parse.
    pub input: String,
}

impl FromStr for UserId {
    type Err = ParseIdError;

    /// Parse a form-entered id.
    ///
    /// Surrounding whitespace is tolerated; anything else that is not a
    /// plain non-negative integer is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self).map_err(|_| ParseIdError {
            input: s.to_string(),
        })
    }
}

/// The fields of a record, as addressed by the edit surface.
///
/// Used as the key for draft merges and validation errors. The ordering
/// follows the form layout so error maps iterate in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// The record id (entered on add, frozen on edit).
    Id,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact email address.
    Email,
    /// Organizational department.
    Department,
}

impl Field {
    /// The form/wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Department => "department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
