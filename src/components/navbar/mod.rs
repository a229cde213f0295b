//! Navigation bar component.
//!
//! Fixed bar with section links, theme toggle and the mobile menu button.
//! Highlights the section currently in view and gains a shadow once the
//! page has scrolled.

use folio_core::Appearance;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{MAIN_ID, NAV_MENU_ID};
use crate::core::navigation;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// DOM id of the mobile menu button; focus returns here when the menu
/// closes.
pub const MENU_BUTTON_ID: &str = "nav-toggle";

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let sections = ctx.content.with_value(|c| c.sections.clone());
    let brand = ctx.content.with_value(|c| c.profile.name.clone());
    let home = sections.first().map(|s| s.id.clone()).unwrap_or_default();

    let is_scrolled = Signal::derive(move || ctx.nav.with(|n| n.is_scrolled()));
    let is_open = Signal::derive(move || ctx.nav.with(|n| n.is_menu_open()));
    let is_dark = Signal::derive(move || ctx.appearance() == Appearance::Dark);

    let links = sections
        .into_iter()
        .map(|section| {
            let id = section.id;
            let href = format!("#{}", id);
            let is_active = {
                let id = id.clone();
                Signal::derive(move || ctx.nav.with(|n| n.active() == Some(id.as_str())))
            };
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                navigation::go_to(ctx, &id);
            };
            view! {
                <li>
                    <a
                        href=href
                        class=move || dom::classes(css::link, &[(css::linkActive, is_active.get())])
                        aria-current=move || is_active.get().then_some("true")
                        on:click=on_click
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let on_brand = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigation::go_to(ctx, &home);
    };

    view! {
        <nav
            class=move || dom::classes(css::navbar, &[(css::navbarScrolled, is_scrolled.get())])
            aria-label="Main navigation"
        >
            <a href="#" class=css::brand on:click=on_brand>{brand}</a>

            <ul
                id=NAV_MENU_ID
                class=move || dom::classes(css::menu, &[(css::menuOpen, is_open.get())])
            >
                {links}
            </ul>

            <div class=css::actions>
                <button
                    class=css::iconButton
                    on:click=move |_| ctx.toggle_theme()
                    title=move || if is_dark.get() { "Switch to light theme" } else { "Switch to dark theme" }
                    aria-label="Toggle colour theme"
                >
                    {move || if is_dark.get() {
                        view! { <Icon icon=ic::SUN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MOON /> }.into_any()
                    }}
                </button>

                <button
                    id=MENU_BUTTON_ID
                    class=move || dom::classes(css::menuButton, &[(css::menuButtonOpen, is_open.get())])
                    on:click=move |_| ctx.toggle_menu()
                    aria-controls=NAV_MENU_ID
                    aria-expanded=move || is_open.get().to_string()
                    aria-label=move || if is_open.get() { "Close menu" } else { "Open menu" }
                >
                    {move || if is_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </div>
        </nav>
    }
}

/// "Skip to content" link, visible only when focused.
#[component]
pub fn SkipLink() -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dom::focus_by_id(MAIN_ID);
    };

    view! {
        <a href=format!("#{}", MAIN_ID) class=css::skipLink on:click=on_click>
            "Skip to content"
        </a>
    }
}
