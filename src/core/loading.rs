//! Loading screen manager.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::utils::dom;

/// Dismiss the loading screen once the minimum display time has passed.
///
/// Components that should wait for the page to be visible (the typing
/// effect) key off `ctx.loaded`.
pub fn init(ctx: AppContext) {
    spawn_local(async move {
        let wait = ctx.loading_gate.remaining(dom::now_ms());
        if wait > 0 {
            TimeoutFuture::new(wait).await;
        }
        ctx.loaded.set(true);
        dom::set_body_class("loaded", true);
        dom::log("folio: content revealed");
    });
}
