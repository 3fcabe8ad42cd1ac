//! Core type system and domain definitions
//!
//! This module provides the central type definitions for the directory
//! search system. All types are strongly-typed wrappers over the raw
//! JSON document the site serves.

pub mod search;
pub mod user;

pub use search::*;
pub use user::*;
