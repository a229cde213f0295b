//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper treats a
//! missing window, document or element as a no-op rather than an error.

use folio_core::anim::Rect;
use folio_core::nav::{MenuToggle, SectionBounds};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

use crate::config::{MENU_TOGGLE_EVENT, NAV_MENU_ID};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Current wall-clock time in milliseconds.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

// =============================================================================
// Console
// =============================================================================

pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

// =============================================================================
// Events
// =============================================================================

/// Register a window event listener for the lifetime of the page.
///
/// The closure is leaked with `forget()`; these listeners are installed once
/// at startup and never removed.
pub fn on_window(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(window) = window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        warn(&format!("failed to listen for '{}'", event));
    }
    closure.forget();
}

/// Fire the menu toggle CustomEvent; `detail` carries the open flag.
pub fn dispatch_menu_toggle(toggle: MenuToggle) {
    let Some(window) = window() else {
        return;
    };
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&wasm_bindgen::JsValue::from_bool(toggle.open));
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(MENU_TOGGLE_EVENT, &init) {
        let _ = window.dispatch_event(&event);
    }
}

/// Read the open flag from a menu toggle event.
pub fn menu_toggle_detail(event: &web_sys::Event) -> Option<MenuToggle> {
    let custom = event.dyn_ref::<web_sys::CustomEvent>()?;
    custom.detail().as_bool().map(|open| MenuToggle { open })
}

/// Whether the event originated in a text field (keys typed there are not
/// shortcuts).
pub fn is_editable_target(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

// =============================================================================
// Layout
// =============================================================================

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Viewport-relative rectangle of an element.
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect {
        top: r.top(),
        left: r.left(),
        bottom: r.bottom(),
        right: r.right(),
    }
}

/// Document-relative bounds of the given section ids. Missing sections are
/// skipped.
pub fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let offset = scroll_y();
    ids.iter()
        .filter_map(|id| {
            let rect = element_rect(&document.get_element_by_id(id)?);
            Some(SectionBounds {
                id: id.clone(),
                top: rect.top + offset,
                height: rect.bottom - rect.top,
            })
        })
        .collect()
}

/// Smoothly scroll so the section's top sits just below the navbar.
pub fn scroll_to_section(id: &str, nav_offset: f64) {
    let Some(window) = window() else {
        return;
    };
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let top = element_rect(&element).top + scroll_y() - nav_offset;
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

// =============================================================================
// Classes and attributes
// =============================================================================

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// Set an attribute on `<html>`.
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(name, value);
    }
}

// =============================================================================
// Focus
// =============================================================================

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), \
                         textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Focusable elements inside the navigation menu, in DOM order.
pub fn menu_focusables() -> Vec<HtmlElement> {
    let Some(menu) = document().and_then(|d| d.get_element_by_id(NAV_MENU_ID)) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// The element that currently has focus.
pub fn active_element() -> Option<web_sys::Element> {
    document()?.active_element()
}

/// Focus an element by id.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_by_id(id: &str) -> bool {
    if let Some(document) = document()
        && let Some(element) = document.get_element_by_id(id)
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Build a class attribute from a base class plus conditional ones.
pub fn classes(base: &str, extra: &[(&str, bool)]) -> String {
    let mut out = base.to_string();
    for (class, on) in extra {
        if *on {
            out.push(' ');
            out.push_str(class);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(classes("card", &[]), "card");
        assert_eq!(
            classes("card", &[("hidden", true), ("active", false), ("wide", true)]),
            "card hidden wide"
        );
    }
}
