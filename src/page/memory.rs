//! In-memory page surface
//!
//! A minimal stand-in for the real page: elements are id-keyed bags of
//! classes, attributes, and replacement content, held in document order.
//! Used by the integration tests and by the terminal driver's interactive
//! mode.

use std::collections::BTreeMap;

use crate::page::surface::{ElementId, MenuSurface, SearchSurface};
use crate::page::{BURGER_CLASS, RESULT_TABLE_ID, SEARCH_INPUT_ID, SUMMARY_ELEMENT_ID, TARGET_ATTRIBUTE};

/// Attribute holding the search input's current text
const VALUE_ATTRIBUTE: &str = "value";

#[derive(Debug, Clone, Default)]
struct MemoryElement {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
}

/// Id-addressable element store implementing both page surfaces
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    // Document order matters for the burger scan
    elements: Vec<(ElementId, MemoryElement)>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty element with the given id
    pub fn add_element<T: Into<ElementId>>(&mut self, id: T) {
        self.elements.push((id.into(), MemoryElement::default()));
    }

    /// Adds a burger control, optionally naming its companion element
    pub fn add_burger<T: Into<ElementId>>(&mut self, id: T, target: Option<&str>) {
        let mut element = MemoryElement::default();
        element.classes.push(BURGER_CLASS.to_string());
        if let Some(target) = target {
            element
                .attributes
                .insert(TARGET_ATTRIBUTE.to_string(), target.to_string());
        }
        self.elements.push((id.into(), element));
    }

    /// Adds the three search widgets: input box, summary line, table body
    pub fn add_search_widgets(&mut self) {
        self.add_element(SEARCH_INPUT_ID);
        self.add_element(SUMMARY_ELEMENT_ID);
        self.add_element(RESULT_TABLE_ID);
    }

    /// Writes the search input's text, as typing into the box would
    pub fn set_query(&mut self, text: &str) {
        let id = ElementId::new(SEARCH_INPUT_ID);
        if let Some(element) = self.element_mut(&id) {
            element
                .attributes
                .insert(VALUE_ATTRIBUTE.to_string(), text.to_string());
        }
    }

    /// Removes an element, as page teardown would
    pub fn remove_element(&mut self, id: &ElementId) {
        self.elements.retain(|(element_id, _)| element_id != id);
    }

    pub fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.element(id)
            .map(|element| element.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn inner_html(&self, id: &ElementId) -> Option<&str> {
        self.element(id).map(|element| element.inner_html.as_str())
    }

    /// Current content of the summary element
    pub fn summary_text(&self) -> String {
        self.inner_html(&ElementId::new(SUMMARY_ELEMENT_ID))
            .unwrap_or_default()
            .to_string()
    }

    /// Current content of the results table body
    pub fn result_rows_html(&self) -> String {
        self.inner_html(&ElementId::new(RESULT_TABLE_ID))
            .unwrap_or_default()
            .to_string()
    }

    fn element(&self, id: &ElementId) -> Option<&MemoryElement> {
        self.elements
            .iter()
            .find(|(element_id, _)| element_id == id)
            .map(|(_, element)| element)
    }

    fn element_mut(&mut self, id: &ElementId) -> Option<&mut MemoryElement> {
        self.elements
            .iter_mut()
            .find(|(element_id, _)| element_id == id)
            .map(|(_, element)| element)
    }
}

impl MenuSurface for MemoryPage {
    fn burger_controls(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, element)| element.classes.iter().any(|c| c == BURGER_CLASS))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn attribute(&self, id: &ElementId, attribute: &str) -> Option<String> {
        self.element(id)
            .and_then(|element| element.attributes.get(attribute).cloned())
    }

    fn has_element(&self, id: &ElementId) -> bool {
        self.element(id).is_some()
    }

    fn toggle_class(&mut self, id: &ElementId, class: &str) -> Option<bool> {
        let element = self.element_mut(id)?;
        if let Some(position) = element.classes.iter().position(|c| c == class) {
            element.classes.remove(position);
            Some(false)
        } else {
            element.classes.push(class.to_string());
            Some(true)
        }
    }
}

impl SearchSurface for MemoryPage {
    fn has_search_input(&self) -> bool {
        self.has_element(&ElementId::new(SEARCH_INPUT_ID))
    }

    fn query_text(&self) -> String {
        self.attribute(&ElementId::new(SEARCH_INPUT_ID), VALUE_ATTRIBUTE)
            .unwrap_or_default()
    }

    fn replace_result_rows(&mut self, html: &str) {
        let id = ElementId::new(RESULT_TABLE_ID);
        if let Some(element) = self.element_mut(&id) {
            element.inner_html = html.to_string();
        }
    }

    fn set_summary_text(&mut self, text: &str) {
        let id = ElementId::new(SUMMARY_ELEMENT_ID);
        if let Some(element) = self.element_mut(&id) {
            element.inner_html = text.to_string();
        }
    }
}
