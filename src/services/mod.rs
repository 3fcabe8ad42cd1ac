//! Core services for directory loading, caching, and search

pub mod fetch;
pub mod search;
pub mod store;

pub use fetch::*;
pub use search::*;
pub use store::*;
