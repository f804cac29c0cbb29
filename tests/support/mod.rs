//! Vector-backed mock host: a flat stack of panels inside one scrollable
//! frame (or the global viewport), with recorded transform applications.
#![allow(dead_code)]

use std::collections::HashMap;

use scrollstack::{Host, NodeId, PanelTransform};

/// Install a fmt subscriber once per test binary so engine traces show
/// up in captured test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Default)]
pub struct MockHost {
    pub frame_scroll: f64,
    pub frame_height: f64,
    pub window_scroll: f64,
    pub window_height: f64,
    /// Frame-relative top per node; absent = detached.
    pub tops: HashMap<NodeId, f64>,
    pub applied: Vec<(NodeId, PanelTransform)>,
    pub spacing: HashMap<NodeId, f64>,
}

impl MockHost {
    /// A frame `height` px tall with panels at the given tops and an end
    /// marker directly after them.
    pub fn internal_frame(height: f64, panel_tops: &[f64], end_top: f64) -> (Self, Vec<NodeId>, NodeId) {
        let mut host = MockHost {
            frame_height: height,
            window_height: height,
            ..MockHost::default()
        };
        let mut panels = Vec::new();
        for (i, &top) in panel_tops.iter().enumerate() {
            let id = NodeId(i as u64 + 1);
            host.tops.insert(id, top);
            panels.push(id);
        }
        let end = NodeId(panel_tops.len() as u64 + 1);
        host.tops.insert(end, end_top);
        (host, panels, end)
    }

    /// Last transform applied to `panel`, if any.
    pub fn last_applied(&self, panel: NodeId) -> Option<PanelTransform> {
        self.applied
            .iter()
            .rev()
            .find(|(id, _)| *id == panel)
            .map(|(_, t)| *t)
    }

    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

impl Host for MockHost {
    fn frame_scroll_top(&self) -> f64 {
        self.frame_scroll
    }

    fn frame_height(&self) -> f64 {
        self.frame_height
    }

    fn set_frame_scroll_top(&mut self, px: f64) {
        self.frame_scroll = px;
    }

    fn window_scroll_y(&self) -> f64 {
        self.window_scroll
    }

    fn window_height(&self) -> f64 {
        self.window_height
    }

    fn set_window_scroll_y(&mut self, px: f64) {
        self.window_scroll = px;
    }

    fn local_top(&self, node: NodeId) -> Option<f64> {
        // Flat tree: every node is a direct child of the frame.
        self.tops.get(&node).copied()
    }

    fn offset_parent(&self, _node: NodeId) -> Option<NodeId> {
        None
    }

    fn viewport_top(&self, node: NodeId) -> Option<f64> {
        self.tops.get(&node).map(|top| top - self.window_scroll)
    }

    fn apply_transform(&mut self, panel: NodeId, transform: PanelTransform) {
        self.applied.push((panel, transform));
    }

    fn set_panel_spacing(&mut self, panel: NodeId, gap_px: f64) {
        self.spacing.insert(panel, gap_px);
    }
}
