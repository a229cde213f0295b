//! Hero section: name, typing headline and call-to-action buttons.

use folio_core::anim::parallax_offset;
use folio_core::notify::NotificationKind;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::hooks::use_typing;
use crate::components::icons as ic;
use crate::config::animation::PARALLAX_SPEED;
use crate::core::navigation;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (profile, phrases) = ctx.content.with_value(|c| (c.profile.clone(), c.typing.clone()));

    let typed = use_typing(phrases);
    let offset = use_parallax(ctx);

    let resume_url = profile.resume_url.clone();
    let on_resume = move |_: leptos::ev::MouseEvent| {
        if let Some(url) = &resume_url {
            dom::open_in_new_tab(url);
            ctx.notify(NotificationKind::Success, "Resume opened in a new tab");
        }
    };
    let has_resume = profile.resume_url.is_some();

    view! {
        <section id="home" class=css::hero>
            <div
                class=css::backdrop
                aria-hidden="true"
                style:transform=move || format!("translateY({:.1}px)", offset.get())
            ></div>

            <div class=css::content>
                <p class=css::greeting>"Hi, I'm"</p>
                <h1 class=css::name>{profile.name}</h1>
                <p class=css::role>
                    <span class=css::typed aria-hidden="true">{typed}</span>
                    <span class=css::cursor aria-hidden="true">"|"</span>
                    <span class="sr-only">{profile.role}</span>
                </p>
                <p class=css::tagline>{profile.tagline}</p>

                <div class=css::actions>
                    <button
                        class=css::primary
                        on:click=move |_| navigation::go_to(ctx, "projects")
                    >
                        "View projects"
                    </button>
                    <Show when=move || has_resume>
                        <button class=css::secondary on:click=on_resume.clone()>
                            <Icon icon=ic::DOWNLOAD />
                            <span>"Resume"</span>
                        </button>
                    </Show>
                </div>
            </div>

            <button
                class=css::scrollHint
                on:click=move |_| navigation::go_to(ctx, "about")
                aria-label="Scroll to about"
            >
                <Icon icon=ic::ARROW_DOWN />
            </button>
        </section>
    }
}

/// Vertical offset of the hero backdrop, following scroll at
/// `PARALLAX_SPEED`. Stays at zero while motion is reduced.
fn use_parallax(ctx: AppContext) -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0);
    let pending = StoredValue::new(false);

    dom::on_window("scroll", move |_| {
        if ctx.reduce_motion.try_get_untracked() != Some(false) {
            return;
        }
        if pending.try_get_value() != Some(false) {
            return;
        }
        pending.set_value(true);
        request_animation_frame(move || {
            pending.try_update_value(|p| *p = false);
            set_offset.try_set(parallax_offset(dom::scroll_y(), PARALLAX_SPEED));
        });
    });

    Effect::new(move |_| {
        if ctx.reduce_motion.get() {
            set_offset.set(0.0);
        }
    });

    offset
}
