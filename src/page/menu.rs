//! Burger-menu toggle controller
//!
//! Each burger control pairs with one companion element named by its
//! `data-target` attribute. The pair is resolved fresh on every click and
//! nothing is persisted between clicks; toggles on different controls are
//! fully independent, with no mutual exclusion between open menus.

use crate::page::surface::{ElementId, MenuSurface};
use crate::page::{ACTIVE_CLASS, TARGET_ATTRIBUTE};

/// Menu toggle errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The clicked control is no longer on the page
    ControlNotFound(ElementId),
    /// The control carries no target-name attribute
    MissingTargetAttribute(ElementId),
    /// No element exists with the id the control names
    TargetNotFound {
        control: ElementId,
        target: ElementId,
    },
}

impl std::fmt::Display for MenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ControlNotFound(control) => {
                write!(f, "Burger control '{}' not found", control)
            }
            Self::MissingTargetAttribute(control) => {
                write!(
                    f,
                    "Burger control '{}' has no '{}' attribute",
                    control, TARGET_ATTRIBUTE
                )
            }
            Self::TargetNotFound { control, target } => {
                write!(
                    f,
                    "Burger control '{}' names missing target '{}'",
                    control, target
                )
            }
        }
    }
}

impl std::error::Error for MenuError {}

/// The set of burger controls found at bind time.
///
/// The scan happens once; controls added to the page later are not picked
/// up, matching the page's bind-at-ready behavior.
#[derive(Debug, Clone)]
pub struct MenuBinding {
    controls: Vec<ElementId>,
}

impl MenuBinding {
    /// Scans the page for burger controls and fixes the set
    pub fn bind(surface: &impl MenuSurface) -> Self {
        let controls = surface.burger_controls();
        tracing::debug!("Bound {} burger controls", controls.len());
        Self { controls }
    }

    /// The bound controls, in document order
    pub fn controls(&self) -> &[ElementId] {
        &self.controls
    }

    /// Handles a click on one bound control: resolves its target by the
    /// `data-target` attribute and toggles the active class on the
    /// control and on the target, independently.
    ///
    /// A missing attribute or unresolvable target is reported as a
    /// [`MenuError`] and leaves every class untouched.
    pub fn click(
        &self,
        surface: &mut impl MenuSurface,
        control: &ElementId,
    ) -> Result<(), MenuError> {
        let target_name = surface
            .attribute(control, TARGET_ATTRIBUTE)
            .ok_or_else(|| {
                if surface.has_element(control) {
                    MenuError::MissingTargetAttribute(control.clone())
                } else {
                    MenuError::ControlNotFound(control.clone())
                }
            })?;
        let target = ElementId::new(target_name);

        // Resolve the target before touching any class so a bad pair
        // leaves both elements in their prior state.
        if !surface.has_element(&target) {
            return Err(MenuError::TargetNotFound {
                control: control.clone(),
                target,
            });
        }

        surface.toggle_class(control, ACTIVE_CLASS);
        surface.toggle_class(&target, ACTIVE_CLASS);
        Ok(())
    }
}
