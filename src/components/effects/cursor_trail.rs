use folio_core::trail::CursorTrail as Trail;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::app::AppContext;
use crate::config::trail::{LENGTH, LIFETIME_MS};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/effects/effects.module.css");

/// Fading dots behind the mouse pointer. Touch-only devices get none.
#[component]
pub fn CursorTrail() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let trail = RwSignal::new(Trail::new(LENGTH, LIFETIME_MS));
    let (now, set_now) = signal(0.0);
    let animating = StoredValue::new(false);
    let fine_pointer = use_media_query("(pointer: fine)");

    dom::on_window("mousemove", move |event| {
        if ctx.reduce_motion.try_get_untracked() != Some(false)
            || fine_pointer.try_get_untracked() != Some(true)
        {
            return;
        }
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let at = dom::now_ms();
        trail.update(|t| t.push(f64::from(mouse.client_x()), f64::from(mouse.client_y()), at));
        if animating.try_get_value() == Some(false) {
            animating.set_value(true);
            fade(trail, set_now, animating);
        }
    });

    Effect::new(move |_| {
        if ctx.reduce_motion.get() {
            trail.update(Trail::clear);
        }
    });

    let dots = move || {
        let now = now.get();
        trail.with(|t| t.dots(now))
    };

    view! {
        <div class=css::trail aria-hidden="true">
            {move || dots()
                .into_iter()
                .map(|dot| {
                    let size = 4.0 + 6.0 * dot.scale;
                    view! {
                        <span
                            class=css::trailDot
                            style:left=format!("{:.1}px", dot.x - size / 2.0)
                            style:top=format!("{:.1}px", dot.y - size / 2.0)
                            style:width=format!("{:.1}px", size)
                            style:height=format!("{:.1}px", size)
                            style:opacity=format!("{:.2}", dot.opacity)
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Re-render every frame until every dot has faded.
fn fade(trail: RwSignal<Trail>, set_now: WriteSignal<f64>, animating: StoredValue<bool>) {
    request_animation_frame(move || {
        let now = dom::now_ms();
        let visible = trail.try_with_untracked(|t| !t.dots(now).is_empty());
        set_now.try_set(now);
        match visible {
            Some(true) => fade(trail, set_now, animating),
            Some(false) => {
                animating.try_update_value(|a| *a = false);
            }
            // Owner disposed
            None => {}
        }
    });
}
