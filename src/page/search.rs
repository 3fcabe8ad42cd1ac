//! Search panel controller
//!
//! Owns the directory store and keeps the rendered output in sync with
//! the query text: every query-change event runs one filter pass over the
//! cached records and fully replaces the result rows and the summary
//! line. While the store is not loaded the pass sees an empty directory,
//! so early keystrokes render an empty table instead of faulting.

use crate::formatter::render_selection;
use crate::page::surface::SearchSurface;
use crate::services::{DirectoryStore, FetchOutcome, select_users};
use crate::types::SearchQuery;

/// Controller for the live search widgets
#[derive(Debug, Default)]
pub struct SearchPanel {
    store: DirectoryStore,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self {
            store: DirectoryStore::new(),
        }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    /// Feeds the fetch completion into the store (first completion wins)
    pub fn complete_load(&mut self, outcome: FetchOutcome) {
        self.store.complete(outcome);
    }

    /// Handles one query-change event on the search input
    pub fn on_query_changed(&self, surface: &mut impl SearchSurface) {
        let query = SearchQuery::new(surface.query_text());
        self.render(surface, &query);
    }

    /// Runs one filter pass and replaces both output fragments
    pub fn render(&self, surface: &mut impl SearchSurface, query: &SearchQuery) {
        let selection = select_users(self.store.records(), query);
        let (rows, summary) = render_selection(&selection);
        surface.replace_result_rows(&rows);
        surface.set_summary_text(&summary);
    }
}
