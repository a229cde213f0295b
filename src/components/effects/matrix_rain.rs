use folio_core::matrix::MatrixRain as Rain;
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::AppContext;
use crate::config::matrix::{DURATION_MS, FONT_SIZE, FRAME_MS};
use crate::core::error::DomError;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/effects/effects.module.css");

/// Full-screen canvas of falling glyphs. Runs for `DURATION_MS` after
/// `ctx.matrix_active` is set; a click stops it early.
#[component]
pub fn MatrixRain() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move |was_active: Option<bool>| {
        let active = ctx.matrix_active.get();
        if active
            && was_active != Some(true)
            && let Some(canvas) = canvas_ref.get_untracked()
            && let Err(e) = start(ctx, canvas)
        {
            dom::warn(&format!("matrix rain unavailable: {}", e));
            ctx.matrix_active.set(false);
        }
        active
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class=move || dom::classes(css::matrix, &[(css::matrixActive, ctx.matrix_active.get())])
            aria-hidden="true"
            on:click=move |_| ctx.matrix_active.set(false)
        ></canvas>
    }
}

struct Frame {
    ctx: AppContext,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    rain: Rain,
    started_at: f64,
}

fn start(ctx: AppContext, canvas: HtmlCanvasElement) -> Result<(), DomError> {
    dom::window().ok_or(DomError::NoWindow)?;
    let context = canvas
        .get_context("2d")
        .map_err(|e| DomError::js("getContext", e))?
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(DomError::NoCanvasContext)?;

    let (width, height) = dom::viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    context.set_font(&format!("{}px monospace", FONT_SIZE));

    dom::log("folio: matrix rain started");
    draw(Frame {
        ctx,
        canvas,
        context,
        rain: Rain::new(width, height, FONT_SIZE),
        started_at: dom::now_ms(),
    });
    Ok(())
}

/// Paint one step, then schedule the next until time is up or the effect
/// was switched off.
fn draw(mut frame: Frame) {
    let ctx = frame.ctx;
    let keep_going = ctx.matrix_active.try_get_untracked() == Some(true)
        && ctx.reduce_motion.try_get_untracked() == Some(false)
        && dom::now_ms() - frame.started_at < f64::from(DURATION_MS);

    let (width, height) = dom::viewport_size();
    if width as u32 != frame.canvas.width() || height as u32 != frame.canvas.height() {
        // Resizing the canvas resets its 2d state.
        frame.canvas.set_width(width as u32);
        frame.canvas.set_height(height as u32);
        frame.context.set_font(&format!("{}px monospace", FONT_SIZE));
        frame.rain.resize(width, height);
    }
    if !keep_going {
        frame.context.clear_rect(0.0, 0.0, width, height);
        ctx.matrix_active.try_set(false);
        return;
    }

    // Translucent wash leaves fading tails behind each drop.
    frame.context.set_fill_style_str("rgba(0, 0, 0, 0.05)");
    frame.context.fill_rect(0.0, 0.0, width, height);
    frame.context.set_fill_style_str("#0f0");
    for glyph in frame.rain.step(js_sys::Math::random) {
        let (x, y) = frame.rain.position(&glyph);
        let _ = frame.context.fill_text(&glyph.ch.to_string(), x, y);
    }

    Timeout::new(FRAME_MS, move || draw(frame)).forget();
}
