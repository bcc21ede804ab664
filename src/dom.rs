//! Small document helpers: element lookup, click wiring, and the two
//! presentational side effects of a section transition (smooth scroll and
//! nav-dot highlight).
//!
//! Page markup contract: section regions carry ids `section-0..N-1`,
//! navigation dots carry ids `nav-dot-0..N-1` and an `active` class on the
//! current one.

use wasm_bindgen::JsCast;
use web_sys as web;

pub const SECTION_ID_PREFIX: &str = "section-";
pub const NAV_DOT_ID_PREFIX: &str = "nav-dot-";
pub const ACTIVE_DOT_CLASS: &str = "active";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Smooth-scroll the given section's DOM region into view. Fire-and-forget;
/// a missing element is ignored.
pub fn scroll_section_into_view(document: &web::Document, index: usize) {
    if let Some(el) = document.get_element_by_id(&format!("{SECTION_ID_PREFIX}{index}")) {
        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Move the `active` class to the dot for `index`.
pub fn set_active_dot(document: &web::Document, index: usize, count: usize) {
    for i in 0..count {
        if let Some(el) = document.get_element_by_id(&format!("{NAV_DOT_ID_PREFIX}{i}")) {
            let class_list = el.class_list();
            let _ = if i == index {
                class_list.add_1(ACTIVE_DOT_CLASS)
            } else {
                class_list.remove_1(ACTIVE_DOT_CLASS)
            };
        }
    }
}
