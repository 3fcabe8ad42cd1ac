//! Integration tests for directory filtering
//!
//! These tests verify the selection properties the page relies on: the
//! result cap, case-insensitive matching over both fields, preservation
//! of the directory's relative order, and the exactness of the three
//! summary counts.

mod test_util;

use directory_search::services::{DEFAULT_SHOW_LIMIT, select_users};
use directory_search::types::{SearchQuery, UserRecord};
use test_util::{alice_and_bob, numbered_records};

#[test]
fn test_empty_query_selects_everything_but_caps_at_ten() {
    let records = numbered_records(15);
    let selection = select_users(&records, &SearchQuery::new(""));

    assert_eq!(selection.total(), 15);
    assert_eq!(selection.selected(), 15);
    assert_eq!(selection.shown_count(), DEFAULT_SHOW_LIMIT);
    assert_eq!(selection.shown().len(), 10);
}

#[test]
fn test_shown_is_a_prefix_of_the_selection() {
    let records = numbered_records(15);
    let selection = select_users(&records, &SearchQuery::new(""));

    // Capping keeps the original relative order: the first ten records
    // come back, in order, with no ranking applied.
    let logins: Vec<String> = selection
        .shown()
        .iter()
        .map(|record| record.gh_login.to_string())
        .collect();
    let expected: Vec<String> = (1..=10).map(|i| format!("person{}", i)).collect();
    assert_eq!(logins, expected);
}

#[test]
fn test_upper_and_lower_case_queries_select_identical_sets() {
    let records = alice_and_bob();

    let upper = select_users(&records, &SearchQuery::new("AL"));
    let lower = select_users(&records, &SearchQuery::new("al"));

    let upper_logins: Vec<&str> = upper
        .shown()
        .iter()
        .map(|record| record.gh_login.as_str())
        .collect();
    let lower_logins: Vec<&str> = lower
        .shown()
        .iter()
        .map(|record| record.gh_login.as_str())
        .collect();
    assert_eq!(upper_logins, lower_logins);
    assert_eq!(upper_logins, vec!["asmith"]);
}

#[test]
fn test_match_in_either_field_qualifies() {
    let records = vec![
        UserRecord::new("Xavier Quinn", "needle-login"),
        UserRecord::new("Needle Name", "xquinn"),
        UserRecord::new("Unrelated", "nobody"),
    ];
    let selection = select_users(&records, &SearchQuery::new("needle"));

    assert_eq!(selection.selected(), 2);
    assert_eq!(selection.shown()[0].gh_login, "needle-login");
    assert_eq!(selection.shown()[1].name, "Needle Name");
}

#[test]
fn test_counts_always_nest() {
    let records = numbered_records(23);
    for query in ["", "1", "person", "Number2", "no-such-user"] {
        let selection = select_users(&records, &SearchQuery::new(query));
        assert!(
            selection.shown_count() <= selection.selected(),
            "shown must never exceed selected for query {:?}",
            query
        );
        assert!(
            selection.selected() <= selection.total(),
            "selected must never exceed total for query {:?}",
            query
        );
        assert_eq!(selection.total(), 23);
    }
}

#[test]
fn test_identical_queries_select_identically() {
    let records = numbered_records(15);

    let first = select_users(&records, &SearchQuery::new("1"));
    let second = select_users(&records, &SearchQuery::new("1"));

    let first_logins: Vec<&str> = first
        .shown()
        .iter()
        .map(|record| record.gh_login.as_str())
        .collect();
    let second_logins: Vec<&str> = second
        .shown()
        .iter()
        .map(|record| record.gh_login.as_str())
        .collect();
    assert_eq!(first_logins, second_logins);
}

#[test]
fn test_no_match_selects_nothing() {
    let records = alice_and_bob();
    let selection = select_users(&records, &SearchQuery::new("zzz"));

    assert_eq!(selection.selected(), 0);
    assert!(selection.shown().is_empty());
    assert_eq!(selection.total(), 2);
}
