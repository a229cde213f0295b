use folio_core::content::Experience as Role;
use folio_core::reveal::RevealKind;
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::SectionTitle;
use crate::app::AppContext;
use crate::components::hooks::use_reveal;
use crate::config::animation::TIMELINE_PULSE_MS;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn Experience() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let roles = ctx.content.with_value(|c| c.experience.clone());

    let items = roles
        .into_iter()
        .enumerate()
        .map(|(i, role)| view! { <TimelineItem index=i role=role /> })
        .collect::<Vec<_>>();

    view! {
        <section id="experience" class=css::section aria-labelledby="experience-title">
            <SectionTitle id="experience" />
            <ol class=css::timeline>{items}</ol>
        </section>
    }
}

/// Timeline entry that slides in and pulses its marker once.
#[component]
fn TimelineItem(index: usize, role: Role) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, format!("timeline-{}", index), RevealKind::TimelineItem);
    let (pulsing, set_pulsing) = signal(false);

    Effect::new(move |_| {
        if revealed.get().is_none() || ctx.reduce_motion.get_untracked() {
            return;
        }
        set_pulsing.set(true);
        Timeout::new(TIMELINE_PULSE_MS, move || {
            set_pulsing.try_set(false);
        })
        .forget();
    });

    let highlights = role
        .highlights
        .into_iter()
        .map(|h| view! { <li>{h}</li> })
        .collect::<Vec<_>>();

    view! {
        <li class=css::timelineEntry>
            <div
                node_ref=node
                class=move || dom::classes(
                    css::timelineItem,
                    &[(css::revealed, revealed.get().is_some())],
                )
            >
                <span
                    class=move || dom::classes(css::timelineMarker, &[(css::pulse, pulsing.get())])
                    aria-hidden="true"
                ></span>
                <p class=css::timelinePeriod>{role.period}</p>
                <h3 class=css::cardTitle>{role.title}</h3>
                <p class=css::timelineOrg>{role.organization}</p>
                <p>{role.summary}</p>
                <ul class=css::highlights>{highlights}</ul>
            </div>
        </li>
    }
}
