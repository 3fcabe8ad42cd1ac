//! HTML fragments for the search results table
//!
//! The page replaces the result table body and the summary element
//! wholesale on every filter pass, so both renderers produce complete
//! replacement content rather than patches. Record fields are emitted
//! verbatim; the directory is trusted source data.

use crate::services::SearchSelection;
use crate::types::UserRecord;

/// Path prefix of the per-user profile pages
pub const USER_PAGE_PATH: &str = "/users/";

/// One table row per record: display name, then a profile link whose
/// visible text keeps the login's original casing while the href embeds
/// the lowercased form.
pub fn results_table_rows(records: &[&UserRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                r#"<tr><td>{}</td><td><a href="{}{}">{}</a></td></tr>"#,
                record.name,
                USER_PAGE_PATH,
                record.gh_login.to_lowercase(),
                record.gh_login
            )
        })
        .collect()
}

/// Summary line with the exact total/selected/shown counts
pub fn summary_line(total: usize, selected: usize, shown: usize) -> String {
    format!("Total: {} Selected: {} Showing: {}", total, selected, shown)
}

/// Renders both replacement fragments for one filter pass
pub fn render_selection(selection: &SearchSelection<'_>) -> (String, String) {
    let rows = results_table_rows(selection.shown());
    let summary = summary_line(selection.total(), selection.selected(), selection.shown_count());
    (rows, summary)
}
