//! Interruptible smooth-scroll tween.
//!
//! Drives the scroll offset directly every sample instead of relying on
//! native inertial scrolling, which cannot be damped or retargeted
//! mid-flight on all host platforms. The tween has a mutable target:
//! retargeting resamples the current position as the new start and resets
//! the time baseline, so position is continuous and the latest input wins.

/// Fixed animation length.
pub(crate) const SMOOTH_SCROLL_DURATION_MS: f64 = 1200.0;

/// Exponential ease-out `1 − 2^(−10t)`, clamped to 1.
pub(crate) fn ease_out_expo(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ScrollTween {
    from: f64,
    to: f64,
    start_ms: f64,
}

impl ScrollTween {
    pub fn start(from: f64, to: f64, now_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms: now_ms,
        }
    }

    /// Interpolated scroll offset at `now_ms`.
    pub fn position(&self, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        let progress = (elapsed / SMOOTH_SCROLL_DURATION_MS).min(1.0);
        self.from + (self.to - self.from) * ease_out_expo(progress)
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= SMOOTH_SCROLL_DURATION_MS
    }

    /// Redirect the in-flight animation to a new target. The current
    /// sampled position becomes the new start so there is no jump.
    pub fn retarget(&mut self, now_ms: f64, to: f64) {
        self.from = self.position(now_ms);
        self.to = to;
        self.start_ms = now_ms;
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.to
    }
}
