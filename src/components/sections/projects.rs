use folio_core::content::Project;
use folio_core::filter::{ProjectFilter, available_filters};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Reveal, SectionTitle};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn Projects() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (projects, categories) =
        ctx.content.with_value(|c| (c.projects.clone(), c.project_categories()));

    let visible_count = {
        let categories = categories.clone();
        Signal::derive(move || {
            ctx.filter
                .with(|f| f.apply(&categories).into_iter().filter(|v| *v).count())
        })
    };

    let buttons = available_filters(&categories)
        .into_iter()
        .map(|filter| view! { <FilterButton filter=filter /> })
        .collect::<Vec<_>>();

    let cards = projects
        .into_iter()
        .zip(categories)
        .map(|(project, categories)| {
            view! { <ProjectCard project=project categories=categories /> }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class=css::section aria-labelledby="projects-title">
            <SectionTitle id="projects" />
            <div class=css::filters role="group" aria-label="Filter projects">
                {buttons}
            </div>
            <p class="sr-only" aria-live="polite">
                {move || format!("{} projects shown", visible_count.get())}
            </p>
            <Reveal key="project-grid".to_string() class=css::projectGrid>
                {cards}
            </Reveal>
        </section>
    }
}

#[component]
fn FilterButton(filter: ProjectFilter) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let label = filter_label(&filter);
    let value = filter.to_string();
    let is_active = {
        let filter = filter.clone();
        Signal::derive(move || ctx.filter.with(|f| *f == filter))
    };

    view! {
        <button
            class=move || dom::classes(css::filterButton, &[(css::filterActive, is_active.get())])
            data-filter=value
            aria-pressed=move || is_active.get().to_string()
            on:click=move |_| ctx.filter.set(filter.clone())
        >
            {label}
        </button>
    }
}

#[component]
fn ProjectCard(project: Project, categories: Vec<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let data_category = categories.join(" ");
    let is_visible = Signal::derive(move || ctx.filter.with(|f| f.matches(&categories)));

    let tech = project
        .tech
        .into_iter()
        .map(|t| view! { <li>{t}</li> })
        .collect::<Vec<_>>();

    view! {
        <article
            class=move || dom::classes(css::projectCard, &[(css::projectHidden, !is_visible.get())])
            data-category=data_category
            aria-hidden=move || (!is_visible.get()).then_some("true")
        >
            <h3 class=css::cardTitle>{project.title}</h3>
            <p>{project.description}</p>
            <ul class=css::techList>{tech}</ul>
            <div class=css::projectLinks>
                {project.link.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer">
                        <Icon icon=ic::EXTERNAL_LINK />
                        <span>"Live"</span>
                    </a>
                })}
                {project.repo.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer">
                        <Icon icon=ic::CODE />
                        <span>"Source"</span>
                    </a>
                })}
            </div>
        </article>
    }
}

/// Button label for a filter: "All" or the capitalized tag.
fn filter_label(filter: &ProjectFilter) -> String {
    let tag = match filter {
        ProjectFilter::All => "all",
        ProjectFilter::Category(tag) => tag.as_str(),
    };
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_label() {
        assert_eq!(filter_label(&ProjectFilter::All), "All");
        assert_eq!(filter_label(&ProjectFilter::Category("web".into())), "Web");
        assert_eq!(filter_label(&ProjectFilter::Category(String::new())), "");
    }
}
