//! Frame-coalescing update scheduler.
//!
//! Input handlers only ever call [`UpdateScheduler::request_update`]; the
//! host's frame callback drains at most one recompute per frame via
//! `begin_tick`/`end_tick`. The two flags make the coalesce-and-follow-up
//! rule an explicit transition table:
//!
//! | state (scheduled, recomputing) | request_update | begin_tick        |
//! |--------------------------------|----------------|-------------------|
//! | (false, false)                 | (true, false)  | no tick           |
//! | (true,  false)                 | (true, false)  | tick, (false,true)|
//! | (_,     true)                  | (true, true)   | no tick           |
//!
//! A request arriving while a recompute is in progress is not dropped: it
//! leaves `tick_scheduled` set, so the next frame runs exactly one
//! follow-up tick.

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct UpdateScheduler {
    tick_scheduled: bool,
    recomputing: bool,
}

impl UpdateScheduler {
    /// Ask for a recompute on the next frame. Idempotent within a frame.
    pub fn request_update(&mut self) {
        if !self.tick_scheduled {
            tracing::trace!("update tick scheduled");
        }
        self.tick_scheduled = true;
    }

    /// Claim the pending tick, if any. Returns true when the caller
    /// should recompute now; re-entrant calls while recomputing return
    /// false and leave any new request pending.
    pub fn begin_tick(&mut self) -> bool {
        if !self.tick_scheduled || self.recomputing {
            return false;
        }
        self.tick_scheduled = false;
        self.recomputing = true;
        true
    }

    /// Mark the recompute claimed by `begin_tick` as finished.
    pub fn end_tick(&mut self) {
        self.recomputing = false;
    }

    /// Cancel any pending tick and clear the in-progress flag. Called on
    /// teardown so no scheduled work survives the engine.
    pub fn cancel(&mut self) {
        self.tick_scheduled = false;
        self.recomputing = false;
    }

    #[cfg(test)]
    pub fn tick_pending(&self) -> bool {
        self.tick_scheduled
    }
}
