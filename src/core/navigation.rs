//! Navigation manager: active section tracking, navbar state and closing
//! the mobile menu when the layout switches to desktop.

use folio_core::anim::{Debounce, Throttle};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{MOBILE_BREAKPOINT_PX, NAV_OFFSET_PX, RESIZE_DEBOUNCE_MS, SCROLL_THROTTLE_MS};
use crate::utils::dom;

pub fn init(ctx: AppContext) {
    let ids = ctx.content.with_value(|c| c.section_ids());

    // Leading edge through the throttle, plus one trailing update so the
    // final resting position is always applied.
    let trailing = StoredValue::new(Debounce::new());
    let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);
    {
        let ids = ids.clone();
        dom::on_window("scroll", move |_| {
            if throttle.ready(dom::now_ms()) {
                update(ctx, &ids);
            }
            let Some(ticket) = trailing.try_update_value(|d| d.call()) else {
                return;
            };
            let ids = ids.clone();
            Timeout::new(SCROLL_THROTTLE_MS as u32, move || {
                if trailing.try_with_value(|d| d.is_latest(ticket)) == Some(true) {
                    update(ctx, &ids);
                }
            })
            .forget();
        });
    }

    let resize = StoredValue::new(Debounce::new());
    {
        let ids = ids.clone();
        dom::on_window("resize", move |_| {
            let Some(ticket) = resize.try_update_value(|d| d.call()) else {
                return;
            };
            let ids = ids.clone();
            Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                if resize.try_with_value(|d| d.is_latest(ticket)) != Some(true) {
                    return;
                }
                let (width, _) = dom::viewport_size();
                if width >= MOBILE_BREAKPOINT_PX {
                    ctx.close_menu();
                }
                update(ctx, &ids);
            })
            .forget();
        });
    }

    // Sections are not in the DOM until the first render completes.
    request_animation_frame(move || update(ctx, &ids));
}

/// Recompute active section and navbar state from the scroll position.
fn update(ctx: AppContext, ids: &[String]) {
    let bounds = dom::section_bounds(ids);
    let scroll_y = dom::scroll_y();
    let Some(mut nav) = ctx.nav.try_get_untracked() else {
        return;
    };
    let change = nav.on_scroll(scroll_y, &bounds, NAV_OFFSET_PX);
    if change.active_changed || change.scrolled_changed {
        ctx.nav.set(nav);
    }
}

/// Jump to a section from a nav link.
pub fn go_to(ctx: AppContext, id: &str) {
    dom::scroll_to_section(id, NAV_OFFSET_PX);
    ctx.nav.update(|n| n.select(id));
    ctx.close_menu();
}
