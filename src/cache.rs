//! Last-emitted transform per panel, used to suppress writes whose
//! change is imperceptible.

use crate::transform::PanelTransform;

// Per-channel thresholds; a change must exceed one of these to be worth
// re-applying downstream.
const EPS_TRANSLATE: f64 = 0.1;
const EPS_SCALE: f64 = 0.001;
const EPS_ROTATION: f64 = 0.1;
const EPS_BLUR: f64 = 0.1;

/// Engine-owned change cache, keyed by panel index.
///
/// One instance per engine, so independent engines never share state.
/// Entry count always equals the number of registered panels; entries are
/// cleared (not removed) on teardown.
#[derive(Clone, Debug)]
pub(crate) struct TransformCache {
    last: Vec<Option<PanelTransform>>,
}

impl TransformCache {
    pub fn new(panel_count: usize) -> Self {
        Self {
            last: vec![None; panel_count],
        }
    }

    /// Whether `next` differs from the cached value beyond the epsilons.
    /// A panel with no cached entry always emits.
    pub fn should_emit(&self, index: usize, next: &PanelTransform) -> bool {
        match self.last.get(index).copied().flatten() {
            None => true,
            Some(prev) => {
                (next.translate_y - prev.translate_y).abs() > EPS_TRANSLATE
                    || (next.scale - prev.scale).abs() > EPS_SCALE
                    || (next.rotation_deg - prev.rotation_deg).abs() > EPS_ROTATION
                    || (next.blur_px - prev.blur_px).abs() > EPS_BLUR
            }
        }
    }

    /// Record `next` as the last emitted transform for `index`.
    pub fn commit(&mut self, index: usize, next: PanelTransform) {
        if let Some(slot) = self.last.get_mut(index) {
            *slot = Some(next);
        }
    }

    /// Drop every cached entry, keeping the panel slots.
    pub fn clear(&mut self) {
        for slot in &mut self.last {
            *slot = None;
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.last.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(translate_y: f64) -> PanelTransform {
        PanelTransform {
            translate_y,
            ..PanelTransform::identity()
        }
    }

    #[test]
    fn first_emission_always_passes() {
        let cache = TransformCache::new(2);
        assert!(cache.should_emit(0, &PanelTransform::identity()));
    }

    #[test]
    fn sub_epsilon_changes_are_suppressed() {
        let mut cache = TransformCache::new(1);
        cache.commit(0, t(10.0));
        assert!(!cache.should_emit(0, &t(10.05)));
        assert!(cache.should_emit(0, &t(10.2)));
    }

    #[test]
    fn each_channel_has_its_own_epsilon() {
        let mut cache = TransformCache::new(1);
        cache.commit(0, PanelTransform::identity());

        let mut small = PanelTransform::identity();
        small.scale = 1.0005;
        small.rotation_deg = 0.05;
        small.blur_px = 0.05;
        assert!(!cache.should_emit(0, &small));

        let mut scale_only = PanelTransform::identity();
        scale_only.scale = 1.002;
        assert!(cache.should_emit(0, &scale_only));
    }

    #[test]
    fn clear_keeps_slots_but_forgets_values() {
        let mut cache = TransformCache::new(3);
        cache.commit(1, t(5.0));
        cache.clear();
        assert_eq!(cache.len(), 3);
        assert!(cache.should_emit(1, &t(5.0)));
    }

    #[test]
    fn out_of_range_index_is_harmless() {
        let mut cache = TransformCache::new(1);
        cache.commit(7, t(1.0));
        assert!(cache.should_emit(7, &t(1.0)));
    }
}
