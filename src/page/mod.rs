//! Page surface abstractions and controllers
//!
//! The page proper is an external collaborator: this crate never touches
//! real markup. Instead the two interactive behaviors are written against
//! the narrow capability traits in [`surface`], with controllers wiring
//! them to the services layer. [`MemoryPage`] implements the traits for
//! tests and for the terminal driver.

pub mod boot;
pub mod memory;
pub mod menu;
pub mod search;
pub mod surface;

pub use boot::*;
pub use memory::*;
pub use menu::*;
pub use search::*;
pub use surface::*;

/// Marker class of burger-menu controls
pub const BURGER_CLASS: &str = "navbar-burger";

/// Class whose presence means "currently shown/expanded"
pub const ACTIVE_CLASS: &str = "is-active";

/// Attribute on a burger control naming its companion element
pub const TARGET_ATTRIBUTE: &str = "data-target";

/// Element id of the search input box
pub const SEARCH_INPUT_ID: &str = "user-search";

/// Element id of the summary line
pub const SUMMARY_ELEMENT_ID: &str = "total";

/// Element id of the results table body
pub const RESULT_TABLE_ID: &str = "mytable";
