//! Reusable stateful logic shared by page sections.
//!
//! - [`use_typing`] drives a [`folio_core::TypingEffect`] from timers
//! - [`use_reveal`] fires a one-shot effect when an element scrolls into view
//! - [`use_counter`] animates a stat counter once revealed

use folio_core::anim::CounterAnimation;
use folio_core::reveal::{REVEAL_THRESHOLD, RevealKind};
use folio_core::{TypingId, TypingTiming};
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::AppContext;
use crate::config::animation;
use crate::core::error::DomError;
use crate::utils::dom;

// ============================================================================
// Typing
// ============================================================================

/// Text of a typing animation cycling through `phrases`.
///
/// The animation starts once the loading screen is gone and stops when the
/// owning component is disposed.
pub fn use_typing(phrases: Vec<String>) -> ReadSignal<String> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (text, set_text) = signal(String::new());
    let running = StoredValue::new(None::<TypingId>);

    Effect::new(move |_| {
        if !ctx.loaded.get() || running.get_value().is_some() {
            return;
        }
        let started = ctx
            .typing
            .try_update_value(|r| r.start(phrases.clone(), TypingTiming::default()));
        match started {
            Some(Ok(id)) => {
                running.set_value(Some(id));
                schedule_tick(ctx, id, set_text, 0);
            }
            Some(Err(e)) => dom::warn(&format!("typing effect not started: {}", e)),
            None => {}
        }
    });

    on_cleanup(move || {
        if let Some(id) = running.try_get_value().flatten() {
            ctx.typing.try_update_value(|r| r.stop(id));
        }
    });

    text
}

/// Run one tick after `delay_ms`, then reschedule with the delay the engine
/// asks for. Stops as soon as the registry no longer knows the id.
fn schedule_tick(ctx: AppContext, id: TypingId, set_text: WriteSignal<String>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let Some(frame) = ctx.typing.try_update_value(|r| r.tick(id)).flatten() else {
            return;
        };
        set_text.try_set(frame.text);
        schedule_tick(ctx, id, set_text, frame.delay_ms);
    })
    .forget();
}

// ============================================================================
// Reveal
// ============================================================================

/// Register `target` for a one-shot reveal under `key`.
///
/// The returned signal holds the effect to play once the element has been
/// seen, and `None` before that. If the observer cannot be created the
/// element is revealed immediately so content is never left hidden.
pub fn use_reveal(
    target: NodeRef<html::Div>,
    key: String,
    kind: RevealKind,
) -> ReadSignal<Option<RevealKind>> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (revealed, set_revealed) = signal(None::<RevealKind>);

    ctx.reveal.update_value(|t| t.observe(key.clone(), kind.clone()));

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if let Err(e) = observe(ctx, element.unchecked_into(), key.clone(), set_revealed) {
            dom::warn(&format!("reveal '{}' disabled: {}", key, e));
            ctx.reveal.update_value(|t| {
                t.report(&key, 1.0);
            });
            set_revealed.set(Some(kind.clone()));
        }
    });

    revealed
}

fn observe(
    ctx: AppContext,
    element: web_sys::Element,
    key: String,
    set_revealed: WriteSignal<Option<RevealKind>>,
) -> Result<(), DomError> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                match ctx
                    .reveal
                    .try_update_value(|t| t.report(&key, entry.intersection_ratio()))
                {
                    Some(Some(kind)) => {
                        set_revealed.try_set(Some(kind));
                        observer.disconnect();
                    }
                    Some(None) => {}
                    // Owner disposed
                    None => observer.disconnect(),
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(animation::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| DomError::js("IntersectionObserver", e))?;
    observer.observe(&element);

    // The observer disconnects itself after the first reveal.
    callback.forget();
    Ok(())
}

// ============================================================================
// Counter
// ============================================================================

/// Value of a stat counter: zero until revealed, then counts up to the
/// target. Jumps straight to the target when motion is reduced.
pub fn use_counter(revealed: ReadSignal<Option<RevealKind>>) -> ReadSignal<u32> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (value, set_value) = signal(0u32);

    Effect::new(move |_| {
        let Some(RevealKind::Counter { target }) = revealed.get() else {
            return;
        };
        if ctx.reduce_motion.get_untracked() {
            set_value.set(target);
            return;
        }
        let counter = CounterAnimation::new(
            target,
            animation::COUNTER_DURATION_MS,
            dom::now_ms(),
        );
        animate_counter(counter, set_value);
    });

    value
}

fn animate_counter(counter: CounterAnimation, set_value: WriteSignal<u32>) {
    request_animation_frame(move || {
        let now = dom::now_ms();
        set_value.try_set(counter.value_at(now));
        if !counter.is_done(now) {
            animate_counter(counter, set_value);
        }
    });
}
