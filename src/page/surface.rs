//! Capability traits the page implements
//!
//! The controllers only ever ask a page for these operations, which keeps
//! the filter, render, and toggle logic testable without any real markup.

/// Element identifier wrapper type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        ElementId::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        ElementId::new(s)
    }
}

/// What the menu controller needs from a page
pub trait MenuSurface {
    /// Every element currently carrying the burger marker class, in
    /// document order. Called once at bind time; the set is not
    /// re-scanned afterwards.
    fn burger_controls(&self) -> Vec<ElementId>;

    /// Value of the given attribute on an element, if both exist
    fn attribute(&self, id: &ElementId, attribute: &str) -> Option<String>;

    /// Whether an element with this id exists
    fn has_element(&self, id: &ElementId) -> bool;

    /// Toggles a class on an element: adds it if absent, removes it if
    /// present. Returns the class's new presence, or `None` if the
    /// element does not exist.
    fn toggle_class(&mut self, id: &ElementId, class: &str) -> Option<bool>;
}

/// What the search controller needs from a page
pub trait SearchSurface {
    /// Whether the search input exists on this page at all
    fn has_search_input(&self) -> bool;

    /// Current text of the search input
    fn query_text(&self) -> String;

    /// Replaces the content of the results table body
    fn replace_result_rows(&mut self, html: &str);

    /// Replaces the content of the summary element
    fn set_summary_text(&mut self, text: &str);
}
