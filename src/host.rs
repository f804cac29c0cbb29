use crate::transform::PanelTransform;

/// Opaque handle to one node in the host's layout tree.
///
/// The engine never interprets the value; it only hands it back to the
/// [`Host`] for geometry queries and transform application. Panels and
/// the end marker are nodes; so is any intermediate offset parent.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u64);

/// Scroll position and viewport height for one tick.
///
/// Always re-read from the host at the start of a tick, never cached
/// across ticks.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Current scroll offset of the active scroll source, in pixels.
    pub scroll_offset: f64,
    /// Visible height of the active scroll source, in pixels.
    pub viewport_height: f64,
}

/// The engine's boundary to the host's layout tree and scroll surfaces.
///
/// Geometry queries are read-only and must not force layout mutation when
/// invoked mid-tick; the engine batches all reads for a tick before any
/// write. Queries answer `None` for nodes not yet attached to the layout
/// tree; the engine degrades to a zero offset rather than failing.
pub trait Host {
    /// Scroll offset of the internal scrollable frame.
    fn frame_scroll_top(&self) -> f64;
    /// Visible height of the internal scrollable frame.
    fn frame_height(&self) -> f64;
    /// Drive the internal frame's scroll offset directly (smooth scroll
    /// bypasses native inertial scrolling).
    fn set_frame_scroll_top(&mut self, px: f64);

    /// Scroll offset of the global viewport.
    fn window_scroll_y(&self) -> f64;
    /// Visible height of the global viewport.
    fn window_height(&self) -> f64;
    /// Drive the global viewport's scroll offset.
    fn set_window_scroll_y(&mut self, px: f64);

    /// Offset of `node`'s top edge within its offset parent.
    fn local_top(&self, node: NodeId) -> Option<f64>;
    /// Next node in the offset-parent chain; `None` at the frame root.
    fn offset_parent(&self, node: NodeId) -> Option<NodeId>;
    /// Top of `node`'s bounding box relative to the global viewport.
    fn viewport_top(&self, node: NodeId) -> Option<f64>;

    /// Apply a computed transform to a panel. Called at most once per
    /// panel per tick, only when the value changed beyond the cache
    /// epsilons.
    fn apply_transform(&mut self, panel: NodeId, transform: PanelTransform);

    /// Set the static gap below a non-final panel. Called once per panel
    /// at engine construction with the configured `item_distance`.
    fn set_panel_spacing(&mut self, panel: NodeId, gap_px: f64);
}
