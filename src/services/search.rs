//! Live substring filtering over the cached directory

use crate::types::{SearchQuery, UserRecord};

// Show at most 10 matches per render
pub const DEFAULT_SHOW_LIMIT: usize = 10;

/// Result of one filter pass over the directory.
///
/// Holds every matching record in the directory's original relative
/// order; the show limit only caps what [`SearchSelection::shown`]
/// exposes, the selected count stays exact.
#[derive(Debug)]
pub struct SearchSelection<'a> {
    matches: Vec<&'a UserRecord>,
    total: usize,
    show_limit: usize,
}

impl<'a> SearchSelection<'a> {
    /// Overrides the show cap, keeping the selection itself intact
    pub fn with_show_limit(mut self, show_limit: usize) -> Self {
        self.show_limit = show_limit;
        self
    }

    /// Size of the whole directory
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of records matching the query, before capping
    pub fn selected(&self) -> usize {
        self.matches.len()
    }

    /// Number of records actually rendered: `min(selected, cap)`
    pub fn shown_count(&self) -> usize {
        self.matches.len().min(self.show_limit)
    }

    /// The capped matches, in the directory's original order
    pub fn shown(&self) -> &[&'a UserRecord] {
        &self.matches[..self.shown_count()]
    }
}

/// Selects every record whose name or login contains the query,
/// case-insensitively, preserving the directory's relative order.
pub fn select_users<'a>(records: &'a [UserRecord], query: &SearchQuery) -> SearchSelection<'a> {
    let matches: Vec<&UserRecord> = records
        .iter()
        .filter(|record| query.matches(record))
        .collect();
    SearchSelection {
        matches,
        total: records.len(),
        show_limit: DEFAULT_SHOW_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<UserRecord> {
        vec![
            UserRecord::new("Alice Smith", "asmith"),
            UserRecord::new("Bob Jones", "bjones"),
            UserRecord::new("Carol Jonas", "cjonas"),
        ]
    }

    #[test]
    fn test_counts_are_exact() {
        let records = sample_records();
        let selection = select_users(&records, &SearchQuery::new("jo"));
        assert_eq!(selection.total(), 3);
        assert_eq!(selection.selected(), 2);
        assert_eq!(selection.shown_count(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let records = sample_records();
        let selection = select_users(&records, &SearchQuery::new("jo"));
        let names: Vec<&str> = selection
            .shown()
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob Jones", "Carol Jonas"]);
    }

    #[test]
    fn test_show_limit_caps_but_keeps_selected() {
        let records = sample_records();
        let selection = select_users(&records, &SearchQuery::new("")).with_show_limit(2);
        assert_eq!(selection.selected(), 3);
        assert_eq!(selection.shown_count(), 2);
        assert_eq!(selection.shown().len(), 2);
    }
}
