//! DOM input wiring: wheel, keyboard, and navigation-dot events feed the
//! section controller; granted transitions fan out to the presentational
//! side effects. All lock/boundary policy lives in the controller.

use crate::core::{InputSource, SectionController};
use crate::dom;
use crate::frame::SharedClock;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the input closures capture.
#[derive(Clone)]
pub struct NavWiring {
    pub document: web::Document,
    pub controller: Rc<RefCell<SectionController>>,
    pub clock: SharedClock,
}

impl NavWiring {
    /// Route one granted request's side effects: smooth-scroll the target
    /// section into view and move the dot highlight.
    fn dispatch(&self, target: Option<usize>) {
        if let Some(target) = target {
            let count = self.controller.borrow().section_count();
            dom::scroll_section_into_view(&self.document, target);
            dom::set_active_dot(&self.document, target, count);
        }
    }

    pub fn advance(&self, direction: i32, source: InputSource) {
        let now = self.clock.now_secs();
        let granted = self.controller.borrow_mut().advance(direction, source, now);
        self.dispatch(granted);
    }

    pub fn go_to(&self, index: usize, source: InputSource) {
        let now = self.clock.now_secs();
        let granted = self.controller.borrow_mut().go_to(index, source, now);
        self.dispatch(granted);
    }
}

/// Wheel events own section navigation outright: the listener is registered
/// non-passive and always suppresses native scrolling.
pub fn wire_wheel(wiring: NavWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        if let Some(direction) = input::wheel_direction(ev.delta_y()) {
            wiring.advance(direction, InputSource::Wheel);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &options,
        );
    }
    closure.forget();
}

/// Arrow keys and space step between sections; default key behavior is
/// suppressed only for the keys that actually navigate.
pub fn wire_keydown(wiring: NavWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(direction) = input::key_direction(&ev.key()) {
            ev.prevent_default();
            wiring.advance(direction, InputSource::Keyboard);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// One click listener per navigation dot, each requesting its own section.
pub fn wire_nav_dots(wiring: NavWiring) {
    let count = wiring.controller.borrow().section_count();
    for index in 0..count {
        let id = format!("{}{}", dom::NAV_DOT_ID_PREFIX, index);
        let per_dot = wiring.clone();
        dom::add_click_listener(&wiring.document, &id, move || {
            per_dot.go_to(index, InputSource::NavDot)
        });
    }
}
