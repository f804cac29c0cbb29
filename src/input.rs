//! Wheel/touch remapping onto the smooth-scroll tween.
//!
//! Only active when the engine owns an internal scroll frame; bound to
//! the global viewport the remapper is a passthrough and native scrolling
//! applies untouched.

use crate::smooth::ScrollTween;

/// Raw wheel deltas are halved before retargeting.
pub(crate) const WHEEL_DAMPING: f64 = 0.5;
/// Touch drag distance is doubled before retargeting.
pub(crate) const TOUCH_DRAG_GAIN: f64 = 2.0;

#[derive(Clone, Copy, Debug)]
struct TouchGesture {
    start_y: f64,
    start_offset: f64,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct InputRemapper {
    passthrough: bool,
    gesture: Option<TouchGesture>,
    tween: Option<ScrollTween>,
}

impl InputRemapper {
    pub fn new(passthrough: bool) -> Self {
        Self {
            passthrough,
            gesture: None,
            tween: None,
        }
    }

    /// Wheel event: damp the delta, add it to the current offset, and
    /// drive the tween there. Latest input wins; there is no queueing.
    pub fn wheel(&mut self, delta_y: f64, current_offset: f64, now_ms: f64) {
        if self.passthrough {
            return;
        }
        let target = current_offset + delta_y * WHEEL_DAMPING;
        self.drive_to(target, current_offset, now_ms);
    }

    /// Touch start: capture the finger position and the offset at that
    /// instant; both anchor every following move.
    pub fn touch_start(&mut self, y: f64, current_offset: f64) {
        if self.passthrough {
            return;
        }
        self.gesture = Some(TouchGesture {
            start_y: y,
            start_offset: current_offset,
        });
    }

    /// Touch move: continuously retarget relative to the gesture anchor.
    pub fn touch_move(&mut self, y: f64, current_offset: f64, now_ms: f64) {
        if self.passthrough {
            return;
        }
        let Some(gesture) = self.gesture else {
            return;
        };
        let target = gesture.start_offset + (gesture.start_y - y) * TOUCH_DRAG_GAIN;
        self.drive_to(target, current_offset, now_ms);
    }

    /// Touch end: the gesture is over. No added momentum; an in-flight
    /// tween finishes on its own.
    pub fn touch_end(&mut self) {
        self.gesture = None;
    }

    fn drive_to(&mut self, target: f64, current_offset: f64, now_ms: f64) {
        tracing::trace!(to = target, "smooth scroll retarget");
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, target),
            None => self.tween = Some(ScrollTween::start(current_offset, target, now_ms)),
        }
    }

    /// Next scroll offset, if an animation is in flight. Clears the
    /// tween once it has reached its target.
    pub fn sample(&mut self, now_ms: f64) -> Option<f64> {
        let tween = self.tween.as_ref()?;
        let position = tween.position(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(position)
    }

    /// Drop the tween and any active gesture. Called on teardown.
    pub fn cancel(&mut self) {
        self.tween = None;
        self.gesture = None;
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    #[cfg(test)]
    pub fn target(&self) -> Option<f64> {
        self.tween.map(|t| t.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smooth::SMOOTH_SCROLL_DURATION_MS;

    #[test]
    fn wheel_delta_is_damped() {
        let mut input = InputRemapper::new(false);
        input.wheel(100.0, 300.0, 0.0);
        assert_eq!(input.target(), Some(350.0));
    }

    #[test]
    fn wheel_interrupts_in_flight_animation() {
        let mut input = InputRemapper::new(false);
        input.wheel(100.0, 0.0, 0.0);
        let mid = input.sample(200.0).unwrap();
        // Second wheel re-anchors at the offset the first tween reached.
        input.wheel(100.0, mid, 200.0);
        assert_eq!(input.target(), Some(mid + 50.0));
    }

    #[test]
    fn touch_drag_doubles_displacement_from_anchor() {
        let mut input = InputRemapper::new(false);
        input.touch_start(500.0, 1000.0);
        input.touch_move(450.0, 1000.0, 0.0);
        // (500 - 450) * 2 above the anchored offset.
        assert_eq!(input.target(), Some(1100.0));

        // Later moves stay relative to the gesture anchor, not the
        // current offset.
        input.touch_move(400.0, 1042.0, 100.0);
        assert_eq!(input.target(), Some(1200.0));
    }

    #[test]
    fn touch_move_without_start_is_ignored() {
        let mut input = InputRemapper::new(false);
        input.touch_move(450.0, 0.0, 0.0);
        assert!(!input.is_animating());
    }

    #[test]
    fn touch_end_stops_gesture_without_momentum() {
        let mut input = InputRemapper::new(false);
        input.touch_start(500.0, 0.0);
        input.touch_move(480.0, 0.0, 0.0);
        let target = input.target().unwrap();
        input.touch_end();
        // Moves after the gesture ends do nothing; the tween keeps its
        // last target.
        input.touch_move(300.0, 0.0, 50.0);
        assert_eq!(input.target(), Some(target));
    }

    #[test]
    fn sample_clears_tween_at_completion() {
        let mut input = InputRemapper::new(false);
        input.wheel(10.0, 0.0, 0.0);
        assert!(input.is_animating());
        let last = input.sample(SMOOTH_SCROLL_DURATION_MS).unwrap();
        assert_eq!(last, 5.0);
        assert!(!input.is_animating());
        assert_eq!(input.sample(SMOOTH_SCROLL_DURATION_MS + 16.0), None);
    }

    #[test]
    fn passthrough_mode_ignores_everything() {
        let mut input = InputRemapper::new(true);
        input.wheel(100.0, 0.0, 0.0);
        input.touch_start(10.0, 0.0);
        input.touch_move(0.0, 0.0, 0.0);
        assert!(!input.is_animating());
        assert_eq!(input.sample(16.0), None);
    }
}
