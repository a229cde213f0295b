use folio_core::content::Skill;
use folio_core::reveal::RevealKind;
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use super::{Reveal, SectionTitle};
use crate::app::AppContext;
use crate::components::hooks::use_reveal;
use crate::config::animation::SKILL_FILL_DELAY_MS;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn Skills() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let groups = ctx.content.with_value(|c| {
        c.skill_groups()
            .into_iter()
            .map(|group| {
                let skills = c
                    .skills
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.group == group)
                    .map(|(i, s)| (i, s.clone()))
                    .collect::<Vec<_>>();
                (group.to_string(), skills)
            })
            .collect::<Vec<_>>()
    });

    let cards = groups
        .into_iter()
        .map(|(group, skills)| {
            let bars = skills
                .into_iter()
                .map(|(index, skill)| view! { <SkillBar index=index skill=skill /> })
                .collect::<Vec<_>>();
            view! {
                <Reveal key=format!("skill-group-{}", group) class=css::card>
                    <h3 class=css::cardTitle>{group}</h3>
                    {bars}
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class=css::section aria-labelledby="skills-title">
            <SectionTitle id="skills" />
            <div class=css::skillGrid>{cards}</div>
        </section>
    }
}

/// Progress bar that fills to the skill level shortly after it is
/// revealed.
#[component]
fn SkillBar(index: usize, skill: Skill) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(
        node,
        format!("skill-{}", index),
        RevealKind::SkillBar { width: skill.level },
    );
    let (width, set_width) = signal(0u8);

    Effect::new(move |_| {
        let Some(RevealKind::SkillBar { width }) = revealed.get() else {
            return;
        };
        if ctx.reduce_motion.get_untracked() {
            set_width.set(width);
            return;
        }
        Timeout::new(SKILL_FILL_DELAY_MS, move || {
            set_width.try_set(width);
        })
        .forget();
    });

    let level = skill.level;
    let name = skill.name;
    let label = name.clone();

    view! {
        <div node_ref=node class=css::skill>
            <div class=css::skillHeader>
                <span>{name}</span>
                <span class=css::skillLevel>{format!("{}%", level)}</span>
            </div>
            <div
                class=css::skillTrack
                role="progressbar"
                aria-label=label
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=level.to_string()
            >
                <div class=css::skillFill style:width=move || format!("{}%", width.get())></div>
            </div>
        </div>
    }
}
