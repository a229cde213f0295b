//! Loading screen shown until the page is ready.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::LOADING_FADE_MS;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/loading/loading.module.css");

/// Full-screen overlay that fades out once `ctx.loaded` flips, then leaves
/// the DOM.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (removed, set_removed) = signal(false);

    Effect::new(move |_| {
        if ctx.loaded.get() {
            Timeout::new(LOADING_FADE_MS, move || {
                set_removed.try_set(true);
            })
            .forget();
        }
    });

    view! {
        <Show when=move || !removed.get()>
            <div
                class=move || dom::classes(css::screen, &[(css::screenHidden, ctx.loaded.get())])
                role="status"
                aria-live="polite"
                aria-busy=move || (!ctx.loaded.get()).to_string()
            >
                <div class=css::spinner></div>
                <span class=css::label>"Loading"</span>
            </div>
        </Show>
    }
}
