//! User record types for the directory document
//!
//! This module provides types for the entries of the user directory the
//! site publishes as a single JSON array. Only the display name and the
//! GitHub login are read; any other fields in the document are ignored.

use serde::{Deserialize, Serialize};

/// Login identifier wrapper type for GitHub usernames
///
/// Logins are matched case-insensitively and are lowercased when they are
/// embedded in a profile page path, while display output keeps the
/// original casing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Creates a new Login with the specified username
    pub fn new<T: Into<String>>(login: T) -> Self {
        Self(login.into())
    }

    /// Get the login as a string, original casing preserved
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive matching and for the
    /// profile page path segment
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Login {
    fn from(s: &str) -> Self {
        Login::new(s)
    }
}

impl From<String> for Login {
    fn from(s: String) -> Self {
        Login::new(s)
    }
}

impl PartialEq<str> for Login {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Login {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One entry of the user directory document
///
/// The source document may carry more fields (avatar, numeric ids, crate
/// counts); they are not read by the search layer and deserialization
/// ignores them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Display name, rendered verbatim
    pub name: String,
    /// GitHub login, used for matching and for the profile link
    pub gh_login: Login,
}

impl UserRecord {
    pub fn new<N: Into<String>, L: Into<Login>>(name: N, gh_login: L) -> Self {
        Self {
            name: name.into(),
            gh_login: gh_login.into(),
        }
    }
}

/// The user directory: an ordered sequence of records
///
/// Populated at most once per page lifetime and never mutated afterwards.
/// Search results preserve this sequence's relative order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDirectory(Vec<UserRecord>);

impl UserDirectory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<UserRecord>> for UserDirectory {
    fn from(records: Vec<UserRecord>) -> Self {
        UserDirectory::new(records)
    }
}
