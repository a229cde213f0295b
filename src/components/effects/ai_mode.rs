use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/effects/effects.module.css");

/// Panel shown while AI mode is on. Typing `aimode` again, pressing the
/// close button or clicking the backdrop turns it off.
#[component]
pub fn AiModeOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let name = ctx.content.with_value(|c| c.profile.name.clone());
    let close = move || ctx.ai_mode.set(false);

    view! {
        <Show when=move || ctx.ai_mode.get()>
            <div class=css::aiBackdrop on:click=move |_| close()>
                <div
                    class=css::aiPanel
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="ai-mode-title"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 id="ai-mode-title">"AI mode activated"</h2>
                    <p class=css::aiLine>{format!("> Loading {}'s neural portfolio...", name)}</p>
                    <p class=css::aiLine>"> Skills: optimized. Coffee: depleted."</p>
                    <p class=css::aiLine>"> Just kidding. Everything here was written by a human."</p>
                    <button class=css::aiClose on:click=move |_| close() autofocus=true>
                        <Icon icon=ic::CLOSE />
                        <span>"Exit AI mode"</span>
                    </button>
                </div>
            </div>
        </Show>
    }
}
