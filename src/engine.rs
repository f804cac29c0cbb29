use crate::{
    cache::TransformCache,
    calc::{TickCtx, compute_panel},
    config::StackConfig,
    error::{StackError, StackResult},
    geometry::{ScrollSource, source_for},
    host::{Host, NodeId},
    input::InputRemapper,
    scheduler::UpdateScheduler,
    transform::PinState,
};

/// Scroll-driven stacking animation engine.
///
/// One instance per stack. The host wires its scroll/resize signals to
/// [`notify_scroll`]/[`notify_resize`], forwards wheel and touch input in
/// internal-frame mode, and calls [`on_frame`] once per display refresh;
/// the engine coalesces everything into at most one recomputation per
/// frame and applies per-panel transforms through the [`Host`] trait.
///
/// [`notify_scroll`]: StackEngine::notify_scroll
/// [`notify_resize`]: StackEngine::notify_resize
/// [`on_frame`]: StackEngine::on_frame
pub struct StackEngine<H: Host> {
    host: H,
    config: StackConfig,
    panels: Vec<NodeId>,
    end_marker: NodeId,
    source: Box<dyn ScrollSource>,
    cache: TransformCache,
    scheduler: UpdateScheduler,
    input: InputRemapper,
    completed: bool,
    on_complete: Option<Box<dyn FnMut()>>,
    disposed: bool,
}

impl<H: Host> StackEngine<H> {
    /// Build an engine over `panels` (stacking order = list order) and a
    /// sentinel `end_marker` placed after the last panel, whose offset
    /// bounds the shared pin window.
    ///
    /// Applies `item_distance` spacing below every non-final panel and
    /// schedules an initial update so the first frame paints correct
    /// transforms.
    pub fn new(
        host: H,
        config: StackConfig,
        panels: Vec<NodeId>,
        end_marker: NodeId,
    ) -> StackResult<Self> {
        config.validate()?;
        if panels.is_empty() {
            return Err(StackError::validation("panel list must be non-empty"));
        }

        let cache = TransformCache::new(panels.len());
        let source = source_for(config.use_external_viewport);
        let input = InputRemapper::new(config.use_external_viewport);

        let mut engine = Self {
            host,
            config,
            panels,
            end_marker,
            source,
            cache,
            scheduler: UpdateScheduler::default(),
            input,
            completed: false,
            on_complete: None,
            disposed: false,
        };

        for i in 0..engine.panels.len() - 1 {
            let panel = engine.panels[i];
            engine
                .host
                .set_panel_spacing(panel, engine.config.item_distance);
        }
        engine.scheduler.request_update();
        Ok(engine)
    }

    /// Install the one-shot completion callback, fired on each entry into
    /// the terminal panel's pin window.
    pub fn on_sequence_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Hook for the host's scroll signal. Coalesced; safe to call from
    /// any input handler.
    pub fn notify_scroll(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.request_update();
    }

    /// Hook for the host's resize signal.
    pub fn notify_resize(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.request_update();
    }

    /// Wheel input (internal-frame mode; passthrough otherwise).
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) {
        if self.disposed {
            return;
        }
        let offset = self.source.scroll_state(&self.host).scroll_offset;
        self.input.wheel(delta_y, offset, now_ms);
    }

    /// Touch-start input: anchors the drag gesture.
    pub fn on_touch_start(&mut self, y: f64) {
        if self.disposed {
            return;
        }
        let offset = self.source.scroll_state(&self.host).scroll_offset;
        self.input.touch_start(y, offset);
    }

    /// Touch-move input: continuously retargets the smooth scroll.
    pub fn on_touch_move(&mut self, y: f64, now_ms: f64) {
        if self.disposed {
            return;
        }
        let offset = self.source.scroll_state(&self.host).scroll_offset;
        self.input.touch_move(y, offset, now_ms);
    }

    /// Touch-end input: ends the gesture without momentum.
    pub fn on_touch_end(&mut self) {
        if self.disposed {
            return;
        }
        self.input.touch_end();
    }

    /// Drive the engine for one display-refresh frame: advance any
    /// in-flight smooth scroll, then run the coalesced recompute if one
    /// is pending.
    pub fn on_frame(&mut self, now_ms: f64) {
        if self.disposed {
            return;
        }
        if let Some(position) = self.input.sample(now_ms) {
            self.source.set_scroll_offset(&mut self.host, position);
            self.scheduler.request_update();
        }
        if self.scheduler.begin_tick() {
            self.recompute();
            self.scheduler.end_tick();
        }
    }

    /// Synchronous teardown: cancels the pending tick and any in-flight
    /// smooth scroll, clears the change cache, and resets the completion
    /// flag. Every entry point is a no-op afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.cancel();
        self.input.cancel();
        self.cache.clear();
        self.completed = false;
        self.disposed = true;
        tracing::debug!("engine disposed");
    }

    /// Whether [`dispose`](StackEngine::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The engine's configuration.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Borrow the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Borrow the host mutably (e.g. to mutate mock layout in tests).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[tracing::instrument(skip(self))]
    fn recompute(&mut self) {
        // Read phase: everything geometry, before any host write, so one
        // tick never interleaves reads with layout mutation.
        let state = self.source.scroll_state(&self.host);
        let viewport_height = state.viewport_height;
        let stack_px = self.config.stack_position.resolve(viewport_height);
        let scale_end_px = self.config.scale_end_position.resolve(viewport_height);
        let end_top = self.source.offset_of(&self.host, self.end_marker);
        let tops: Vec<f64> = self
            .panels
            .iter()
            .map(|&panel| self.source.offset_of(&self.host, panel))
            .collect();

        let ctx = TickCtx {
            scroll: state.scroll_offset,
            stack_px,
            scale_end_px,
            pin_end: end_top - viewport_height / 2.0,
            tops: &tops,
        };
        tracing::trace!(scroll = state.scroll_offset, "recompute tick");

        // Write phase.
        let terminal = self.panels.len() - 1;
        for (i, &panel) in self.panels.iter().enumerate() {
            let (transform, pin) = compute_panel(i, &self.config, ctx);
            if self.cache.should_emit(i, &transform) {
                self.host.apply_transform(panel, transform);
                self.cache.commit(i, transform);
            }

            if i == terminal {
                let in_window = pin == PinState::Pinned;
                if in_window && !self.completed {
                    self.completed = true;
                    tracing::debug!("stack sequence complete");
                    if let Some(callback) = self.on_complete.as_mut() {
                        callback();
                    }
                } else if !in_window && self.completed {
                    self.completed = false;
                }
            }
        }
    }
}
