//! Performance monitor: switches decorative motion off on slow devices or
//! when the OS asks for reduced motion.

use folio_core::perf::FrameSampler;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::utils::dom;

pub fn init(ctx: AppContext) {
    let sampler = StoredValue::new(FrameSampler::default());

    let prefers_reduced = use_media_query("(prefers-reduced-motion: reduce)");
    Effect::new(move |_| {
        if prefers_reduced.get() {
            sampler.update_value(FrameSampler::force_reduce_motion);
            ctx.reduce_motion.set(true);
        }
    });

    Effect::new(move |_| {
        dom::set_body_class("reduce-motion", ctx.reduce_motion.get());
    });

    sample_frame(ctx, sampler);
}

/// Count one animation frame and schedule the next, until reduce-motion is
/// on.
fn sample_frame(ctx: AppContext, sampler: StoredValue<FrameSampler>) {
    request_animation_frame(move || {
        if ctx.reduce_motion.try_get_untracked() != Some(false)
            || sampler.try_with_value(FrameSampler::reduce_motion) != Some(false)
        {
            return;
        }
        let sample = sampler
            .try_update_value(|s| s.record_frame(dom::now_ms()))
            .flatten();
        if let Some(sample) = sample
            && sample.reduce_motion_engaged
        {
            dom::warn(&format!(
                "folio: {:.0} fps, reducing motion",
                sample.fps
            ));
            ctx.reduce_motion.set(true);
            return;
        }
        sample_frame(ctx, sampler);
    });
}
