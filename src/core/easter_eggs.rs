//! Hidden keyboard shortcuts.
//!
//! - Konami code starts the matrix rain.
//! - Typing `aimode` toggles the AI-mode overlay.

use folio_core::keys::{AI_MODE_WORD, KONAMI, KeySequence};
use folio_core::notify::NotificationKind;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::app::AppContext;
use crate::utils::dom;

pub fn init(ctx: AppContext) {
    let mut konami = KeySequence::new(KONAMI);
    let mut ai_word = KeySequence::new(AI_MODE_WORD);

    dom::on_window("keydown", move |event| {
        if dom::is_editable_target(&event) {
            return;
        }
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };

        if konami.push(&key) {
            start_matrix(ctx);
        }
        if ai_word.push(&key) {
            ctx.ai_mode.update(|on| *on = !*on);
        }
    });
}

fn start_matrix(ctx: AppContext) {
    if ctx.reduce_motion.get_untracked() {
        ctx.notify(
            NotificationKind::Info,
            "Nice try! Matrix rain is off while reduced motion is on.",
        );
        return;
    }
    if !ctx.matrix_active.get_untracked() {
        ctx.matrix_active.set(true);
        ctx.notify(NotificationKind::Success, "Wake up, Neo...");
    }
}
