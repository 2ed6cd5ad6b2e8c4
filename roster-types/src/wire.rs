//! External representation of the remote `/users` resource.

use crate::{User, UserId};
use serde::{Deserialize, Serialize};

/// Company object as served by the remote resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCompany {
    /// Company display name; mapped to the record's department.
    #[serde(default)]
    pub name: String,
}

/// A user as served by `GET /users`.
///
/// The remote schema carries one combined display `name` and an
/// organizational `company`. Unknown fields are ignored; missing ones
/// default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    /// Remote-assigned id.
    pub id: u32,
    /// Combined display name ("First Last ...").
    #[serde(default)]
    pub name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Organizational grouping.
    #[serde(default)]
    pub company: RemoteCompany,
}

impl From<RemoteUser> for User {
    /// Map the remote shape into a local record.
    ///
    /// The display name is split on single spaces: the first token becomes
    /// `first_name`, the second becomes `last_name` (empty when absent).
    /// Any further tokens are dropped - a known-lossy heuristic, not a name
    /// parser.
    fn from(remote: RemoteUser) -> Self {
        let mut tokens = remote.name.split(' ');
        let first_name = tokens.next().unwrap_or("").to_string();
        let last_name = tokens.next().unwrap_or("").to_string();
        User {
            id: UserId::new(remote.id),
            first_name,
            last_name,
            email: remote.email,
            department: remote.company.name,
        }
    }
}
