//! Contact section: form with inline validation and simulated sending.

use folio_core::FormError;
use folio_core::form::{Field, SubmitState};
use folio_core::notify::NotificationKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SIMULATED_SUBMIT_MS;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

/// DOM id of a form control.
fn control_id(field: Field) -> String {
    format!("contact-{}", field.id())
}

fn error_id(field: Field) -> String {
    format!("contact-{}-error", field.id())
}

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let profile = ctx.content.with_value(|c| c.profile.clone());
    let mailto = format!("mailto:{}", profile.email);

    let is_sending = Signal::derive(move || ctx.contact.with(|f| f.is_sending()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(ctx);
    };

    view! {
        <section id="contact" class=css::section aria-labelledby="contact-title">
            <h2 class=css::title id="contact-title">"Get in touch"</h2>
            <div class=css::layout>
                <div class=css::info>
                    <p>"Have a project in mind or just want to say hello? My inbox is open."</p>
                    <a class=css::infoLine href=mailto>
                        <Icon icon=ic::MAIL />
                        <span>{profile.email}</span>
                    </a>
                    {profile.location.map(|location| view! {
                        <span class=css::infoLine>
                            <Icon icon=ic::LOCATION />
                            <span>{location}</span>
                        </span>
                    })}
                </div>

                <form class=css::form on:submit=on_submit novalidate=true>
                    <FormField field=Field::Name />
                    <FormField field=Field::Email />
                    <FormField field=Field::Subject />
                    <FormField field=Field::Message />

                    <button
                        type="submit"
                        class=css::submit
                        disabled=move || is_sending.get()
                        aria-busy=move || is_sending.get().to_string()
                    >
                        <Icon icon=ic::SEND />
                        <span>{move || if is_sending.get() { "Sending..." } else { "Send message" }}</span>
                    </button>

                    <p class=css::status role="status" aria-live="polite">
                        {move || ctx.contact.with(|f| match f.state() {
                            SubmitState::Sent => "Message sent. Thank you!".to_string(),
                            SubmitState::Failed(reason) => format!("Sending failed: {}", reason),
                            SubmitState::Idle | SubmitState::Sending => String::new(),
                        })}
                    </p>
                </form>
            </div>
        </section>
    }
}

/// Validate and, when everything passes, send the message.
fn submit(ctx: AppContext) {
    let Some(result) = ctx.contact.try_update(|f| f.begin_submit()) else {
        return;
    };
    match result {
        Ok(draft) => {
            dom::log(&format!("contact: sending message from {}", draft.email));
            spawn_local(async move {
                // No backend: stand in for network latency.
                TimeoutFuture::new(SIMULATED_SUBMIT_MS).await;
                ctx.contact.try_update(|f| f.finish(Ok(())));
                ctx.notify(
                    NotificationKind::Success,
                    format!("Thanks {}, your message has been sent.", draft.name),
                );
            });
        }
        Err(FormError::Invalid(errors)) => {
            ctx.notify(NotificationKind::Error, "Please fix the highlighted fields.");
            if let Some(field) = errors.first() {
                dom::focus_by_id(&control_id(field));
            }
        }
        Err(FormError::AlreadySending) => {}
    }
}

/// Labelled input with its inline error message.
#[component]
fn FormField(field: Field) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let id = control_id(field);
    let described_by = error_id(field);

    let value = Signal::derive(move || ctx.contact.with(|f| f.draft().get(field).to_string()));
    let error = Signal::derive(move || {
        ctx.contact
            .with(|f| f.errors().get(field).map(|e| e.to_string()))
    });
    let invalid = Signal::derive(move || error.with(Option::is_some));

    let on_input = move |ev: leptos::ev::Event| {
        ctx.contact.update(|f| f.input(field, event_target_value(&ev)));
    };
    let on_blur = move |_: leptos::ev::FocusEvent| {
        ctx.contact.update(|f| f.blur(field));
    };

    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let input_type = if field == Field::Email { "email" } else { "text" };
    let control = match field {
        Field::Message => view! {
            <textarea
                id=id.clone()
                name=field.id()
                rows="6"
                class=move || dom::classes(css::input, &[(css::inputInvalid, invalid.get())])
                prop:value=value
                required=field.is_required()
                aria-invalid=move || invalid.get().to_string()
                aria-describedby=described_by.clone()
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                id=id.clone()
                name=field.id()
                type=input_type
                autocomplete=autocomplete(field)
                class=move || dom::classes(css::input, &[(css::inputInvalid, invalid.get())])
                prop:value=value
                required=field.is_required()
                aria-invalid=move || invalid.get().to_string()
                aria-describedby=described_by.clone()
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any(),
    };

    view! {
        <div class=css::field>
            <label for=id class=css::label>{label}</label>
            {control}
            <span id=error_id(field) class=css::error>
                {move || error.get().unwrap_or_default()}
            </span>
        </div>
    }
}

fn autocomplete(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Subject | Field::Message => "off",
    }
}
