//! Page footer with social links and copyright line.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (name, socials) = ctx.content.with_value(|c| (c.profile.name.clone(), c.socials.clone()));
    let year = js_sys::Date::new_0().get_full_year();

    let links = socials
        .into_iter()
        .map(|social| {
            view! {
                <li>
                    <a href=social.url target="_blank" rel="noopener noreferrer">
                        {social.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class=css::footer>
            <ul class=css::socials>{links}</ul>
            <p class=css::copyright>{format!("© {} {}", year, name)}</p>
        </footer>
    }
}
