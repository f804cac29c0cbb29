//! Scrollstack is a scroll-driven stacking animation engine.
//!
//! It maps a one-dimensional scroll position to per-panel visual
//! transforms (translate, uniform scale, single-axis rotation, blur),
//! implements pin-in-place-while-scrolling semantics, performs custom
//! eased smooth scrolling for wheel/touch input when it owns its scroll
//! frame, and fires a one-shot callback on entry into the terminal
//! panel's pin window.
//!
//! # Pipeline overview
//!
//! 1. **Input**: scroll/resize notifications request an update; wheel and
//!    touch deltas are remapped onto an interruptible scroll tween
//!    (internal-frame mode only).
//! 2. **Schedule**: requests coalesce into at most one recomputation per
//!    display-refresh frame, with an explicit re-entrancy guard.
//! 3. **Read**: the geometry provider re-reads scroll state and panel
//!    offsets fresh, normalized to one frame-relative coordinate space.
//! 4. **Compute**: a pure per-panel calculator derives progress, scale,
//!    rotation, blur, and pin translation.
//! 5. **Emit**: a change cache suppresses sub-epsilon churn; surviving
//!    transforms are applied through the [`Host`] trait and the
//!    completion observer edge-detects the terminal pin window.
//!
//! The engine is single-threaded and cooperative: the only suspension
//! points are "wait for the next frame", driven by the host, and both the
//! pending tick and the scroll tween are cancelled synchronously on
//! [`StackEngine::dispose`]. No error crosses the public boundary after
//! construction; malformed geometry degrades to the least surprising
//! transform instead.
#![forbid(unsafe_code)]

mod cache;
mod calc;
mod input;
mod scheduler;
mod smooth;

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod host;
pub mod transform;

pub use config::{StackConfig, StackLength};
pub use engine::StackEngine;
pub use error::{StackError, StackResult};
pub use geometry::{FrameSource, ScrollSource, ViewportSource};
pub use host::{Host, NodeId, ScrollState};
pub use transform::{PanelTransform, PinState};
