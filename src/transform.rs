/// Visual transform emitted for one panel on one tick.
///
/// Channels are rounded to fixed precision before emission (two decimal
/// places for translate/rotation/blur, three for scale) so that sub-pixel
/// scroll churn compares equal in the change cache.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelTransform {
    /// Vertical offset in pixels; negative before the pin point.
    pub translate_y: f64,
    /// Uniform scale factor, never negative.
    pub scale: f64,
    /// Rotation around the z axis, in degrees.
    pub rotation_deg: f64,
    /// Blur radius in pixels, never negative.
    pub blur_px: f64,
}

impl PanelTransform {
    /// Identity transform: the panel exactly as laid out.
    pub fn identity() -> Self {
        Self {
            translate_y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
            blur_px: 0.0,
        }
    }
}

/// Where the scroll offset sits relative to a panel's pin window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PinState {
    /// Scroll has not reached the panel's pin start yet.
    ReleasedBackward,
    /// Scroll is inside the pin window; translate tracks scroll 1:1.
    Pinned,
    /// Scroll passed the shared pin end; translate frozen at that point.
    ReleasedForward,
}

/// Round to two decimal places (translate, rotation, blur channels).
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to three decimal places (scale channel).
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
