//! Search query type for directory filtering
//!
//! This module provides the query text wrapper used by the live search
//! box. Matching is a plain case-insensitive substring test over the
//! display name and the login, in that order of fields but with no
//! ranking between them.

use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Represents a search text string.
///
/// Wraps the raw text of the search box for type safety. The empty query
/// matches every record, since every string contains the empty substring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased query text used for matching
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// Whether the record's name or login contains this query,
    /// case-insensitively. A match in either field qualifies.
    pub fn matches(&self, record: &UserRecord) -> bool {
        let text = self.normalized();
        record.name.to_lowercase().contains(&text)
            || record.gh_login.to_lowercase().contains(&text)
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        SearchQuery::new(s)
    }
}
