//! Page sections below the hero.
//!
//! - [`About`] - Bio paragraphs and animated stat counters
//! - [`Skills`] - Grouped skill bars that fill when revealed
//! - [`Experience`] - Timeline of roles
//! - [`Projects`] - Project cards with category filter buttons

mod about;
mod experience;
mod projects;
mod skills;

pub use about::About;
pub use experience::Experience;
pub use projects::Projects;
pub use skills::Skills;

use folio_core::reveal::RevealKind;
use leptos::html;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::hooks::use_reveal;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Section heading, labelled from the site content's section list.
#[component]
fn SectionTitle(id: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let label = ctx.content.with_value(|c| {
        c.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| id.to_string())
    });

    view! {
        <h2 class=css::title id=format!("{}-title", id)>{label}</h2>
    }
}

/// Wrapper that fades its children in the first time they scroll into
/// view.
#[component]
fn Reveal(
    /// Unique reveal key.
    key: String,
    /// Extra class for the wrapper.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, key, RevealKind::Fade);

    view! {
        <div
            node_ref=node
            class=move || {
                let base = format!("{} {}", css::reveal, class);
                dom::classes(base.trim_end(), &[(css::revealed, revealed.get().is_some())])
            }
        >
            {children()}
        </div>
    }
}
