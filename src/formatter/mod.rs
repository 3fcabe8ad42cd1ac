//! Output formatting for rendered result rows and summary lines

pub mod results;

pub use results::*;
