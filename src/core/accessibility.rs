//! Accessibility manager: focus handling for the mobile menu.
//!
//! Listens for the menu toggle event. While the menu is open, Tab and
//! Shift+Tab cycle through the menu links and Escape closes it.

use folio_core::nav::MenuToggle;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::app::AppContext;
use crate::components::navbar::MENU_BUTTON_ID;
use crate::config::MENU_TOGGLE_EVENT;
use crate::utils::dom;

pub fn init(ctx: AppContext) {
    dom::on_window(MENU_TOGGLE_EVENT, |event| {
        if let Some(toggle) = dom::menu_toggle_detail(&event) {
            focus_after_render(toggle);
        }
    });

    dom::on_window("keydown", move |event| {
        if ctx.nav.try_with_untracked(|n| n.is_menu_open()) != Some(true) {
            return;
        }
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match key_event.key().as_str() {
            "Escape" => ctx.close_menu(),
            "Tab" => trap_focus(key_event),
            _ => {}
        }
    });
}

/// Move focus into the menu when it opens, back to the menu button when it
/// closes.
///
/// The event fires from the click handler, before the menu's open class has
/// rendered; a hidden menu cannot take focus, so wait for the next frame.
fn focus_after_render(toggle: MenuToggle) {
    request_animation_frame(move || {
        if toggle.open {
            if let Some(first) = dom::menu_focusables().first() {
                let _ = first.focus();
            }
        } else {
            dom::focus_by_id(MENU_BUTTON_ID);
        }
    });
}

/// Wrap focus from the last menu item to the first (and back with Shift).
fn trap_focus(event: &KeyboardEvent) {
    let items = dom::menu_focusables();
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return;
    };
    let active = dom::active_element();
    let is_active = |el: &web_sys::HtmlElement| {
        active.as_ref() == Some(el.unchecked_ref::<web_sys::Element>())
    };
    let inside = items.iter().any(is_active);

    let target = if event.shift_key() {
        (is_active(first) || !inside).then_some(last)
    } else {
        (is_active(last) || !inside).then_some(first)
    };
    if let Some(target) = target {
        event.prevent_default();
        let _ = target.focus();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::config::NAV_MENU_ID;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Mounts a hidden menu with one link, like the collapsed mobile menu.
    fn mount_hidden_menu() -> (web_sys::HtmlElement, web_sys::HtmlElement) {
        let document = dom::document().unwrap();
        let menu: web_sys::HtmlElement = document.create_element("ul").unwrap().unchecked_into();
        menu.set_id(NAV_MENU_ID);
        menu.style().set_property("visibility", "hidden").unwrap();
        let link: web_sys::HtmlElement = document.create_element("a").unwrap().unchecked_into();
        link.set_attribute("href", "#about").unwrap();
        menu.append_child(&link).unwrap();
        document.body().unwrap().append_child(&menu).unwrap();
        (menu, link)
    }

    #[wasm_bindgen_test]
    async fn test_open_focuses_first_link_once_rendered() {
        let (menu, link) = mount_hidden_menu();

        focus_after_render(MenuToggle { open: true });
        // The open class lands after the event handler returns.
        menu.style().set_property("visibility", "visible").unwrap();

        TimeoutFuture::new(100).await;
        let active = dom::active_element().unwrap();
        assert_eq!(&active, link.unchecked_ref::<web_sys::Element>());
        menu.remove();
    }

    #[wasm_bindgen_test]
    async fn test_close_returns_focus_to_menu_button() {
        let document = dom::document().unwrap();
        let button: web_sys::HtmlElement =
            document.create_element("button").unwrap().unchecked_into();
        button.set_id(MENU_BUTTON_ID);
        document.body().unwrap().append_child(&button).unwrap();

        focus_after_render(MenuToggle { open: false });
        TimeoutFuture::new(100).await;

        let active = dom::active_element().unwrap();
        assert_eq!(&active, button.unchecked_ref::<web_sys::Element>());
        button.remove();
    }
}
