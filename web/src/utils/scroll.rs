use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height of the fixed navbar; scroll targets land just below it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Smooth-scroll the window so the section with the given id sits below
/// the navbar. Quietly does nothing when the element is missing.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };

    let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
        - HEADER_OFFSET;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
