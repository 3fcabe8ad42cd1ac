//! Shared fixtures for the integration tests

use directory_search::types::UserRecord;

/// The two-record directory used by the literal rendering scenarios
pub fn alice_and_bob() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Alice Smith", "asmith"),
        UserRecord::new("Bob Jones", "bjones"),
    ]
}

/// A directory of `count` distinct records, for cap and count tests
pub fn numbered_records(count: usize) -> Vec<UserRecord> {
    (1..=count)
        .map(|i| UserRecord::new(format!("Person Number{}", i), format!("person{}", i)))
        .collect()
}
