//! Integration tests for the burger-menu toggle behavior
//!
//! These tests drive the menu controller over the in-memory page surface
//! and verify the toggle contract: both elements of a pair flip together,
//! two clicks restore the original state, controls stay independent, and
//! a broken pair is a reported error that leaves every class untouched.

use directory_search::page::{
    ACTIVE_CLASS, ElementId, MemoryPage, MenuBinding, MenuError, MenuSurface,
};

fn page_with_one_pair() -> MemoryPage {
    let mut page = MemoryPage::new();
    page.add_burger("burger", Some("main-menu"));
    page.add_element("main-menu");
    page
}

#[test]
fn test_click_toggles_control_and_target() {
    let mut page = page_with_one_pair();
    let binding = MenuBinding::bind(&page);
    let burger = ElementId::new("burger");
    let menu = ElementId::new("main-menu");

    binding.click(&mut page, &burger).unwrap();

    assert!(page.has_class(&burger, ACTIVE_CLASS));
    assert!(page.has_class(&menu, ACTIVE_CLASS));
}

#[test]
fn test_two_clicks_restore_the_original_state() {
    let mut page = page_with_one_pair();
    let binding = MenuBinding::bind(&page);
    let burger = ElementId::new("burger");
    let menu = ElementId::new("main-menu");

    binding.click(&mut page, &burger).unwrap();
    binding.click(&mut page, &burger).unwrap();

    assert!(!page.has_class(&burger, ACTIVE_CLASS));
    assert!(!page.has_class(&menu, ACTIVE_CLASS));
}

#[test]
fn test_control_and_target_toggle_independently() {
    // A target that is already expanded collapses while its control
    // becomes active; the two class flips never synchronize.
    let mut page = page_with_one_pair();
    let burger = ElementId::new("burger");
    let menu = ElementId::new("main-menu");
    page.toggle_class(&menu, ACTIVE_CLASS);

    let binding = MenuBinding::bind(&page);
    binding.click(&mut page, &burger).unwrap();

    assert!(page.has_class(&burger, ACTIVE_CLASS));
    assert!(!page.has_class(&menu, ACTIVE_CLASS));
}

#[test]
fn test_multiple_pairs_have_no_mutual_exclusion() {
    let mut page = MemoryPage::new();
    page.add_burger("burger-a", Some("menu-a"));
    page.add_element("menu-a");
    page.add_burger("burger-b", Some("menu-b"));
    page.add_element("menu-b");

    let binding = MenuBinding::bind(&page);
    assert_eq!(binding.controls().len(), 2);

    binding
        .click(&mut page, &ElementId::new("burger-a"))
        .unwrap();
    binding
        .click(&mut page, &ElementId::new("burger-b"))
        .unwrap();

    // Opening the second menu leaves the first one open
    assert!(page.has_class(&ElementId::new("menu-a"), ACTIVE_CLASS));
    assert!(page.has_class(&ElementId::new("menu-b"), ACTIVE_CLASS));
}

#[test]
fn test_scan_is_fixed_at_bind_time() {
    let mut page = page_with_one_pair();
    let binding = MenuBinding::bind(&page);

    // A control added after binding is not picked up
    page.add_burger("late-burger", Some("late-menu"));
    page.add_element("late-menu");

    assert_eq!(binding.controls(), &[ElementId::new("burger")]);
}

#[test]
fn test_missing_target_attribute_is_an_error() {
    let mut page = MemoryPage::new();
    page.add_burger("burger", None);

    let binding = MenuBinding::bind(&page);
    let result = binding.click(&mut page, &ElementId::new("burger"));

    assert_eq!(
        result,
        Err(MenuError::MissingTargetAttribute(ElementId::new("burger")))
    );
    assert!(!page.has_class(&ElementId::new("burger"), ACTIVE_CLASS));
}

#[test]
fn test_unresolvable_target_leaves_classes_untouched() {
    let mut page = MemoryPage::new();
    page.add_burger("burger", Some("missing-menu"));

    let binding = MenuBinding::bind(&page);
    let result = binding.click(&mut page, &ElementId::new("burger"));

    assert_eq!(
        result,
        Err(MenuError::TargetNotFound {
            control: ElementId::new("burger"),
            target: ElementId::new("missing-menu"),
        })
    );
    assert!(!page.has_class(&ElementId::new("burger"), ACTIVE_CLASS));
}

#[test]
fn test_target_resolution_happens_per_click() {
    // The pair is resolved fresh on every click: removing the target
    // after a successful toggle turns the next click into an error.
    let mut page = page_with_one_pair();
    let binding = MenuBinding::bind(&page);
    let burger = ElementId::new("burger");

    binding.click(&mut page, &burger).unwrap();
    page.remove_element(&ElementId::new("main-menu"));

    let result = binding.click(&mut page, &burger);
    assert!(matches!(result, Err(MenuError::TargetNotFound { .. })));
    // The control keeps the state of the successful first click
    assert!(page.has_class(&burger, ACTIVE_CLASS));
}

#[test]
fn test_click_on_a_vanished_control_is_an_error() {
    let mut page = page_with_one_pair();
    let binding = MenuBinding::bind(&page);
    page.remove_element(&ElementId::new("burger"));

    let result = binding.click(&mut page, &ElementId::new("burger"));
    assert_eq!(
        result,
        Err(MenuError::ControlNotFound(ElementId::new("burger")))
    );
}
