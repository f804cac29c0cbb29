//! Pure per-panel transform math.
//!
//! Everything here is a function of the tick inputs; no host access, no
//! engine state. The engine gathers all geometry reads first, then calls
//! [`compute_panel`] once per panel.

use crate::{
    config::StackConfig,
    transform::{PanelTransform, PinState, round2, round3},
};

/// Per-tick values shared by every panel computation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TickCtx<'a> {
    /// Current scroll offset.
    pub scroll: f64,
    /// Resolved `stack_position` in pixels.
    pub stack_px: f64,
    /// Resolved `scale_end_position` in pixels.
    pub scale_end_px: f64,
    /// Shared terminal pin boundary: end-marker offset minus half the
    /// viewport height. Global, not per-panel.
    pub pin_end: f64,
    /// Frame-relative panel tops, in stacking order.
    pub tops: &'a [f64],
}

/// Scroll offset at which panel `index` starts animating and pinning.
pub(crate) fn trigger_start(top: f64, stack_px: f64, stagger: f64, index: usize) -> f64 {
    top - stack_px - stagger * index as f64
}

/// Normalized position of `scroll` within `[start, end]`, clamped.
///
/// A degenerate or inverted window (`end <= start`) collapses to a 0-to-1
/// step at `start`, which keeps the division well defined.
pub(crate) fn progress(scroll: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if scroll >= start { 1.0 } else { 0.0 };
    }
    ((scroll - start) / (end - start)).clamp(0.0, 1.0)
}

/// Largest index whose trigger start is at or below `scroll`; 0 when no
/// panel has been reached. This rescans every panel and is called per
/// panel, so the blur pass is quadratic in the panel count, which is fine
/// for the stacks this engine animates (under ten panels).
pub(crate) fn top_of_stack(scroll: f64, tops: &[f64], stack_px: f64, stagger: f64) -> usize {
    let mut top_index = 0;
    for (j, &top) in tops.iter().enumerate() {
        if scroll >= trigger_start(top, stack_px, stagger, j) {
            top_index = j;
        }
    }
    top_index
}

/// Compute panel `index`'s transform and pin state for one tick.
pub(crate) fn compute_panel(
    index: usize,
    cfg: &StackConfig,
    ctx: TickCtx<'_>,
) -> (PanelTransform, PinState) {
    let top = ctx.tops[index];
    let stagger = cfg.item_stack_distance * index as f64;
    let start = trigger_start(top, ctx.stack_px, cfg.item_stack_distance, index);
    let end = top - ctx.scale_end_px;
    let p = progress(ctx.scroll, start, end);

    let target_scale = cfg.base_scale + index as f64 * cfg.item_scale;
    let scale = (1.0 - p * (1.0 - target_scale)).max(0.0);
    let rotation = if cfg.rotation_amount != 0.0 {
        cfg.rotation_amount * index as f64 * p
    } else {
        0.0
    };

    let blur = if cfg.blur_amount != 0.0 {
        let k = top_of_stack(ctx.scroll, ctx.tops, ctx.stack_px, cfg.item_stack_distance);
        if index < k {
            ((k - index) as f64 * cfg.blur_amount).max(0.0)
        } else {
            0.0
        }
    } else {
        0.0
    };

    // Pin start coincides with the trigger start; pin end is shared.
    let (translate_y, pin) = if ctx.scroll >= start && ctx.scroll <= ctx.pin_end {
        (ctx.scroll - top + ctx.stack_px + stagger, PinState::Pinned)
    } else if ctx.scroll > ctx.pin_end {
        (
            ctx.pin_end - top + ctx.stack_px + stagger,
            PinState::ReleasedForward,
        )
    } else {
        (0.0, PinState::ReleasedBackward)
    };

    (
        PanelTransform {
            translate_y: round2(translate_y),
            scale: round3(scale),
            rotation_deg: round2(rotation),
            blur_px: round2(blur),
        },
        pin,
    )
}
