use folio_core::content::Stat;
use folio_core::reveal::RevealKind;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Reveal, SectionTitle};
use crate::app::AppContext;
use crate::components::hooks::{use_counter, use_reveal};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (profile, stats) = ctx.content.with_value(|c| (c.profile.clone(), c.stats.clone()));

    let paragraphs = profile
        .about
        .into_iter()
        .map(|text| view! { <p>{text}</p> })
        .collect::<Vec<_>>();

    let counters = stats
        .into_iter()
        .enumerate()
        .map(|(i, stat)| view! { <StatCounter index=i stat=stat /> })
        .collect::<Vec<_>>();

    let mailto = format!("mailto:{}", profile.email);

    view! {
        <section id="about" class=css::section aria-labelledby="about-title">
            <SectionTitle id="about" />
            <div class=css::aboutGrid>
                <Reveal key="about-bio".to_string() class=css::aboutText>
                    {paragraphs}
                    <ul class=css::contactFacts>
                        <li>
                            <Icon icon=ic::MAIL />
                            <a href=mailto>{profile.email}</a>
                        </li>
                        {profile.location.map(|location| view! {
                            <li>
                                <Icon icon=ic::LOCATION />
                                <span>{location}</span>
                            </li>
                        })}
                    </ul>
                </Reveal>
                <div class=css::stats>{counters}</div>
            </div>
        </section>
    }
}

#[component]
fn StatCounter(index: usize, stat: Stat) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(
        node,
        format!("stat-{}", index),
        RevealKind::Counter { target: stat.value },
    );
    let value = use_counter(revealed);
    let suffix = stat.suffix;

    view! {
        <div node_ref=node class=css::stat>
            <span class=css::statValue>{move || value.get()}{suffix}</span>
            <span class=css::statLabel>{stat.label}</span>
        </div>
    }
}
