use crate::domain::sync::config::SyncConfig;
use crate::domain::ticks::{BoundPair, Commit, RangeProps, TargetTicks, Tick, TickBound, TickSnapshot};

/// Per-bound bookkeeping. `None` everywhere means the bound is not loaded yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundState {
    /// Last value known to be persisted by the host.
    pub committed: Option<Tick>,
    /// Where the user wants the bound to end up.
    pub target: Option<Tick>,
    /// What is currently drawn; chases `target` frame by frame.
    pub internal: Option<f64>,
}

impl BoundState {
    pub fn from_prop(tick: Option<Tick>) -> Self {
        Self { committed: tick, target: tick, internal: tick.map(|t| t.as_f64()) }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_settled(&self) -> bool {
        match self.target {
            Some(target) => self.internal == Some(target.as_f64()),
            None => true,
        }
    }
}

/// Pure state machine behind the range synchronizer.
///
/// Nothing here schedules work or calls back into the host: operations that
/// have to persist a value hand back a [`Commit`] for the caller to deliver.
#[derive(Debug, Clone)]
pub struct TickRangeState {
    config: SyncConfig,
    bounds: BoundPair<BoundState>,
    is_dragging: bool,
}

impl TickRangeState {
    pub fn new(config: SyncConfig, props: RangeProps) -> Self {
        let mut state = Self { config, bounds: BoundPair::default(), is_dragging: props.is_dragging };
        for bound in TickBound::all() {
            state.bounds[bound] = BoundState::from_prop(props.tick(bound));
        }
        state
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn bound(&self, bound: TickBound) -> &BoundState {
        &self.bounds[bound]
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Apply the host's latest props. Returns `true` when the state was forced
    /// back onto the props, which supersedes any animation or pending commit.
    pub fn resync(&mut self, props: RangeProps) -> bool {
        self.is_dragging = props.is_dragging;
        if !props.is_dragging {
            for bound in TickBound::all() {
                self.bounds[bound] = BoundState::from_prop(props.tick(bound));
            }
            return true;
        }

        for bound in TickBound::all() {
            let Some(prop) = props.tick(bound) else { continue };
            let state = &mut self.bounds[bound];
            if state.is_active() {
                state.committed = Some(prop);
            } else {
                *state = BoundState::from_prop(Some(prop));
            }
        }
        false
    }

    /// Record a new intended value. Ignored unless a drag is in progress and
    /// the bound is loaded; an idle range always mirrors the props.
    pub fn set_target(&mut self, bound: TickBound, tick: Tick) -> bool {
        if !self.is_dragging {
            return false;
        }
        let state = &mut self.bounds[bound];
        if !state.is_active() {
            return false;
        }
        state.target = Some(tick);
        if state.internal.is_none() {
            state.internal = Some(tick.as_f64());
        }
        true
    }

    /// Advance every displayed value one frame toward its target.
    /// Returns `true` while another frame is needed.
    pub fn step_frame(&mut self) -> bool {
        let mut moving = false;
        for bound in TickBound::all() {
            let state = &mut self.bounds[bound];
            let (Some(target), Some(internal)) = (state.target, state.internal) else { continue };
            let target = target.as_f64();
            let diff = target - internal;
            if diff.abs() >= 1.0 {
                state.internal = Some(internal + self.config.step_for(diff));
            } else if internal != target {
                state.internal = Some(target);
            }
            moving |= state.internal != Some(target);
        }
        moving
    }

    pub fn needs_frame(&self) -> bool {
        self.bounds.iter().any(|(_, state)| !state.is_settled())
    }

    /// The quiet interval for `bound` elapsed: persist whatever the target is now.
    pub fn debounce_elapsed(&mut self, bound: TickBound) -> Option<Commit> {
        let state = &mut self.bounds[bound];
        let target = state.target?;
        state.committed = Some(target);
        Some(Commit::new(bound, target))
    }

    /// Snap `bound` onto its target, committing it if the host has not seen it yet.
    pub fn flush_bound(&mut self, bound: TickBound) -> Option<Commit> {
        let state = &mut self.bounds[bound];
        let target = state.target?;
        state.internal = Some(target.as_f64());
        if state.committed == Some(target) {
            return None;
        }
        state.committed = Some(target);
        Some(Commit::new(bound, target))
    }

    pub fn flush(&mut self) -> Vec<Commit> {
        TickBound::all().filter_map(|bound| self.flush_bound(bound)).collect()
    }

    pub fn targets(&self) -> TargetTicks {
        TargetTicks { lower_tick: self.bounds.lower.target, upper_tick: self.bounds.upper.target }
    }

    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            internal_lower_tick: self.bounds.lower.internal,
            internal_upper_tick: self.bounds.upper.internal,
        }
    }
}
