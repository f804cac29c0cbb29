use crate::error::{StackError, StackResult};

/// A length expressed either in pixels or as a fraction of the viewport
/// height, resolved fresh against the current viewport every tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StackLength {
    /// Absolute pixels.
    Px(f64),
    /// Fraction of the viewport height (0.2 = 20%).
    Fraction(f64),
}

impl StackLength {
    /// Resolve to pixels against the given viewport height.
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Fraction(f) => f * viewport_height,
        }
    }

    fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Fraction(v) => v,
        }
    }
}

/// Engine configuration. Immutable for the engine's lifetime.
///
/// Every field has a documented default, so `StackConfig::default()` plus
/// a panel list is a complete setup. The completion callback is not part
/// of the config (it is not plain data); install it with
/// [`crate::StackEngine::on_sequence_complete`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Static vertical gap in pixels after each non-final panel (default 100).
    pub item_distance: f64,
    /// Per-index scale decrement: panel i's target scale is
    /// `base_scale + i * item_scale` (default 0.03).
    pub item_scale: f64,
    /// Per-index stagger in pixels used in trigger/pin math (default 30).
    pub item_stack_distance: f64,
    /// Distance from viewport top at which a panel begins pinning
    /// (default 20% of viewport height).
    pub stack_position: StackLength,
    /// Distance from viewport top at which the scale-in completes
    /// (default 10% of viewport height).
    pub scale_end_position: StackLength,
    /// Minimum scale floor (default 0.85).
    pub base_scale: f64,
    /// Maximum rotation in degrees for panel i at full progress
    /// (default 0, disabled).
    pub rotation_amount: f64,
    /// Blur increment in pixels per depth step beneath the stack top
    /// (default 0, disabled).
    pub blur_amount: f64,
    /// Bind to the global viewport instead of an internal scrollable
    /// frame (default false). Disables the input remapper.
    pub use_external_viewport: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            item_distance: 100.0,
            item_scale: 0.03,
            item_stack_distance: 30.0,
            stack_position: StackLength::Fraction(0.20),
            scale_end_position: StackLength::Fraction(0.10),
            base_scale: 0.85,
            rotation_amount: 0.0,
            blur_amount: 0.0,
            use_external_viewport: false,
        }
    }
}

impl StackConfig {
    /// Check the configuration for values the calculator cannot absorb.
    pub fn validate(&self) -> StackResult<()> {
        finite("item_distance", self.item_distance)?;
        finite("item_scale", self.item_scale)?;
        finite("item_stack_distance", self.item_stack_distance)?;
        finite("stack_position", self.stack_position.value())?;
        finite("scale_end_position", self.scale_end_position.value())?;
        finite("base_scale", self.base_scale)?;
        finite("rotation_amount", self.rotation_amount)?;
        finite("blur_amount", self.blur_amount)?;

        if self.item_distance < 0.0 {
            return Err(StackError::validation("item_distance must be >= 0"));
        }
        if self.base_scale < 0.0 {
            return Err(StackError::validation("base_scale must be >= 0"));
        }
        if self.blur_amount < 0.0 {
            return Err(StackError::validation("blur_amount must be >= 0"));
        }
        Ok(())
    }
}

fn finite(name: &str, v: f64) -> StackResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(StackError::validation(format!("{name} must be finite")))
    }
}
