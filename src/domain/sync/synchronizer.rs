use std::rc::Weak;

use crate::domain::logging::LogComponent;
use crate::domain::sync::{Scheduler, SyncConfig, SyncEvents, TickRangeState};
use crate::domain::ticks::{BoundPair, Commit, RangeProps, TargetTicks, Tick, TickBound, TickSnapshot};
use crate::log_debug;

/// Drives [`TickRangeState`] with real deferred work: one debounce timer per
/// bound and a single animation frame shared by both bounds.
///
/// Task handles are owned here; replacing or dropping a handle cancels the
/// task, so dropping the synchronizer leaves nothing scheduled behind.
pub struct TickRangeSynchronizer<S: Scheduler> {
    state: TickRangeState,
    scheduler: S,
    events: Weak<dyn SyncEvents>,
    timers: BoundPair<Option<S::Timer>>,
    frame: Option<S::Frame>,
    disposed: bool,
}

impl<S: Scheduler> TickRangeSynchronizer<S> {
    pub fn new(config: SyncConfig, props: RangeProps, scheduler: S, events: Weak<dyn SyncEvents>) -> Self {
        Self {
            state: TickRangeState::new(config, props),
            scheduler,
            events,
            timers: BoundPair::new(None, None),
            frame: None,
            disposed: false,
        }
    }

    pub fn state(&self) -> &TickRangeState {
        &self.state
    }

    pub fn internal_tick(&self, bound: TickBound) -> Option<f64> {
        self.state.bound(bound).internal
    }

    pub fn snapshot(&self) -> TickSnapshot {
        self.state.snapshot()
    }

    pub fn targets(&self) -> TargetTicks {
        self.state.targets()
    }

    pub fn has_pending_commit(&self, bound: TickBound) -> bool {
        self.timers[bound].is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.frame.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn sync_props(&mut self, props: RangeProps) {
        if self.disposed {
            return;
        }
        if self.state.resync(props) {
            self.cancel_all();
        }
    }

    /// Move the target of `bound`, keep the animation running and restart the
    /// bound's debounce window.
    pub fn set_target(&mut self, bound: TickBound, tick: Tick) -> bool {
        if self.disposed {
            return false;
        }
        if !self.state.set_target(bound, tick) {
            let reason = if self.state.is_dragging() { "bound not loaded" } else { "not dragging" };
            log_debug!(
                LogComponent::Domain("TickRangeSynchronizer"),
                "ignoring {} target {}: {}",
                bound,
                tick,
                reason
            );
            return false;
        }

        self.ensure_frame();
        let delay = self.state.config().debounce_delay();
        self.timers[bound] = Some(self.scheduler.schedule_debounce(bound, delay, self.events.clone()));
        true
    }

    pub fn on_animation_frame(&mut self) {
        self.frame = None;
        if self.disposed {
            return;
        }
        if self.state.step_frame() {
            self.frame = Some(self.scheduler.request_frame(self.events.clone()));
        }
    }

    pub fn on_debounce_elapsed(&mut self, bound: TickBound) -> Option<Commit> {
        // a timer that was already replaced or cancelled has nothing to commit
        self.timers[bound].take()?;
        if self.disposed {
            return None;
        }
        let commit = self.state.debounce_elapsed(bound)?;
        log_debug!(
            LogComponent::Domain("TickRangeSynchronizer"),
            "debounce elapsed, committing {} = {}",
            commit.bound,
            commit.tick
        );
        Some(commit)
    }

    pub fn flush(&mut self) -> Vec<Commit> {
        if self.disposed {
            return Vec::new();
        }
        self.cancel_all();
        self.state.flush()
    }

    pub fn flush_bound(&mut self, bound: TickBound) -> Option<Commit> {
        if self.disposed {
            return None;
        }
        self.timers[bound] = None;
        let commit = self.state.flush_bound(bound);
        if !self.state.needs_frame() {
            self.frame = None;
        }
        commit
    }

    /// Cancel everything and ignore further input.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.cancel_all();
        log_debug!(LogComponent::Domain("TickRangeSynchronizer"), "disposed");
    }

    fn ensure_frame(&mut self) {
        if self.frame.is_none() && self.state.needs_frame() {
            self.frame = Some(self.scheduler.request_frame(self.events.clone()));
        }
    }

    fn cancel_all(&mut self) {
        self.timers = BoundPair::new(None, None);
        self.frame = None;
    }
}
