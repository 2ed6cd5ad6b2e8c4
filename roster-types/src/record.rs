//! Committed records and in-progress drafts.

use crate::{Field, UserId};
use serde::{Deserialize, Serialize};

/// A committed user record in the local collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id, immutable after creation.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Organizational department.
    pub department: String,
}

/// An in-progress add/edit candidate.
///
/// All fields hold free text as entered; the id is parsed only at submit
/// time. A draft never aliases a committed [`User`] - opening an edit copies
/// the record's fields ([`Draft::from_user`]). Serializes camelCase because
/// the draft itself is the create/update request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Id text as entered (empty for a fresh add).
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Organizational department.
    pub department: String,
}

impl Draft {
    /// Create an empty draft for a new record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft pre-filled from an existing record (copy-on-edit).
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }

    /// Merge a single field value into the draft.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Id => self.id = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Department => self.department = value,
        }
    }

    /// Read a single field value.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Department => &self.department,
        }
    }

    /// Materialize a committed record from this draft under `id`.
    ///
    /// The id argument wins over whatever the id text currently holds, so an
    /// edited record can never change identity.
    pub fn to_user(&self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}
