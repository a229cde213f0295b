//! Toast notification stack.

use folio_core::notify::{Notification, NotificationKind};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/notifications/notifications.module.css");

#[component]
pub fn NotificationStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::stack aria-live="polite" aria-atomic="false">
            <For
                each=move || ctx.notifications.with(|n| n.items().to_vec())
                key=|n| n.id
                let:notification
            >
                <Toast notification=notification />
            </For>
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let id = notification.id;

    let (class, icon, role) = match notification.kind {
        NotificationKind::Success => (css::success, ic::SUCCESS, "status"),
        NotificationKind::Error => (css::error, ic::ERROR, "alert"),
        NotificationKind::Info => (css::info, ic::INFO, "status"),
    };

    view! {
        <div class=format!("{} {}", css::toast, class) role=role>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::message>{notification.message}</span>
            <button
                class=css::close
                aria-label="Dismiss notification"
                on:click=move |_| {
                    ctx.notifications.update(|n| {
                        n.dismiss(id);
                    });
                }
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
