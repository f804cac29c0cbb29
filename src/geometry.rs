use crate::host::{Host, NodeId, ScrollState};

/// Geometry provider over one of the two scroll surfaces.
///
/// The implementation is selected once at engine construction, so the
/// transform calculator never branches on the scroll mode. Both
/// implementations reconcile node offsets into a single frame-relative
/// coordinate space: the internal frame walks the offset-parent chain,
/// the global viewport adds the current scroll offset to the node's
/// viewport-relative bounding top.
pub trait ScrollSource {
    /// Scroll offset and viewport height, read fresh from the host.
    fn scroll_state(&self, host: &dyn Host) -> ScrollState;

    /// Frame-relative offset of `node`'s top edge. A node not yet
    /// attached to the layout tree resolves to 0 (coincident with the
    /// frame origin); the tick must not fail on it.
    fn offset_of(&self, host: &dyn Host, node: NodeId) -> f64;

    /// Drive the source's scroll offset (used by the smooth-scroll
    /// primitive).
    fn set_scroll_offset(&self, host: &mut dyn Host, px: f64);
}

/// Internal scrollable frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSource;

impl ScrollSource for FrameSource {
    fn scroll_state(&self, host: &dyn Host) -> ScrollState {
        ScrollState {
            scroll_offset: host.frame_scroll_top(),
            viewport_height: host.frame_height(),
        }
    }

    fn offset_of(&self, host: &dyn Host, node: NodeId) -> f64 {
        let mut total = 0.0;
        let mut current = Some(node);
        while let Some(n) = current {
            let Some(local) = host.local_top(n) else {
                return 0.0;
            };
            total += local;
            current = host.offset_parent(n);
        }
        total
    }

    fn set_scroll_offset(&self, host: &mut dyn Host, px: f64) {
        host.set_frame_scroll_top(px);
    }
}

/// Global viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportSource;

impl ScrollSource for ViewportSource {
    fn scroll_state(&self, host: &dyn Host) -> ScrollState {
        ScrollState {
            scroll_offset: host.window_scroll_y(),
            viewport_height: host.window_height(),
        }
    }

    fn offset_of(&self, host: &dyn Host, node: NodeId) -> f64 {
        match host.viewport_top(node) {
            Some(top) => top + host.window_scroll_y(),
            None => 0.0,
        }
    }

    fn set_scroll_offset(&self, host: &mut dyn Host, px: f64) {
        host.set_window_scroll_y(px);
    }
}

/// Pick the scroll source for a configuration, once, at construction.
pub(crate) fn source_for(use_external_viewport: bool) -> Box<dyn ScrollSource> {
    if use_external_viewport {
        Box::new(ViewportSource)
    } else {
        Box::new(FrameSource)
    }
}
