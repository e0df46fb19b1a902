use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::domain::logging::LogComponent;
use crate::domain::sync::{Scheduler, SyncConfig, SyncEvents, TickRangeSynchronizer};
use crate::domain::ticks::{Commit, RangeProps, TargetTicks, Tick, TickBound, TickSnapshot};
use crate::log_debug;

type CommitFn = Box<dyn Fn(Tick)>;
type SnapshotObserver = Rc<dyn Fn(TickSnapshot)>;

/// Outbound half of the contract: the host's functions that persist a tick.
pub struct RangeCommitter {
    set_lower_tick: CommitFn,
    set_upper_tick: CommitFn,
}

impl RangeCommitter {
    pub fn new(set_lower_tick: impl Fn(Tick) + 'static, set_upper_tick: impl Fn(Tick) + 'static) -> Self {
        Self { set_lower_tick: Box::new(set_lower_tick), set_upper_tick: Box::new(set_upper_tick) }
    }

    pub fn deliver(&self, commits: impl IntoIterator<Item = Commit>) {
        for commit in commits {
            match commit.bound {
                TickBound::Lower => (self.set_lower_tick)(commit.tick),
                TickBound::Upper => (self.set_upper_tick)(commit.tick),
            }
        }
    }
}

struct ControllerInner<S: Scheduler> {
    sync: RefCell<TickRangeSynchronizer<S>>,
    committer: RangeCommitter,
    observers: RefCell<Vec<SnapshotObserver>>,
}

impl<S: Scheduler> ControllerInner<S> {
    fn publish(&self) {
        let snapshot = self.sync.borrow().snapshot();
        // observers may subscribe or dispose, so iterate over a copy of the list
        let observers: Vec<SnapshotObserver> = self.observers.borrow().clone();
        for observer in observers {
            if self.sync.borrow().is_disposed() {
                break;
            }
            observer(snapshot);
        }
    }
}

impl<S: Scheduler> SyncEvents for ControllerInner<S> {
    fn animation_frame(&self) {
        self.sync.borrow_mut().on_animation_frame();
        self.publish();
    }

    fn debounce_elapsed(&self, bound: TickBound) {
        let commit = self.sync.borrow_mut().on_debounce_elapsed(bound);
        self.committer.deliver(commit);
    }
}

/// Host-facing tick range synchronizer.
///
/// Inbound props arrive through [`sync_props`](Self::sync_props), outbound
/// values leave through the [`RangeCommitter`]. Commit functions always run
/// after internal borrows are released, so they may call back into the
/// controller (a store that feeds the new value straight back as a prop).
pub struct TickRangeController<S: Scheduler> {
    inner: Rc<ControllerInner<S>>,
}

impl<S: Scheduler> Clone for TickRangeController<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S: Scheduler> TickRangeController<S> {
    pub fn new(config: SyncConfig, props: RangeProps, scheduler: S, committer: RangeCommitter) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<ControllerInner<S>>| {
            let events: Weak<dyn SyncEvents> = weak.clone();
            ControllerInner {
                sync: RefCell::new(TickRangeSynchronizer::new(config, props, scheduler, events)),
                committer,
                observers: RefCell::new(Vec::new()),
            }
        });
        Self { inner }
    }

    /// Called with the displayed ticks after every frame, resync and flush.
    pub fn subscribe(&self, observer: impl Fn(TickSnapshot) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn sync_props(&self, props: RangeProps) {
        self.inner.sync.borrow_mut().sync_props(props);
        self.inner.publish();
    }

    pub fn internal_lower_tick(&self) -> Option<f64> {
        self.inner.sync.borrow().internal_tick(TickBound::Lower)
    }

    pub fn internal_upper_tick(&self) -> Option<f64> {
        self.inner.sync.borrow().internal_tick(TickBound::Upper)
    }

    pub fn snapshot(&self) -> TickSnapshot {
        self.inner.sync.borrow().snapshot()
    }

    pub fn debounced_set_lower_tick(&self, tick: i32) {
        self.debounced_set_tick(TickBound::Lower, Tick::from(tick));
    }

    pub fn debounced_set_upper_tick(&self, tick: i32) {
        self.debounced_set_tick(TickBound::Upper, Tick::from(tick));
    }

    pub fn debounced_set_tick(&self, bound: TickBound, tick: Tick) {
        self.inner.sync.borrow_mut().set_target(bound, tick);
    }

    /// Drag ended: commit every divergent target now and stop all deferred work.
    pub fn flush_debounced_values(&self) {
        let commits = self.inner.sync.borrow_mut().flush();
        if !commits.is_empty() {
            log_debug!(LogComponent::Application("TickRangeController"), "flushing {} commit(s)", commits.len());
        }
        self.inner.publish();
        self.inner.committer.deliver(commits);
    }

    pub fn flush_bound(&self, bound: TickBound) {
        let commit = self.inner.sync.borrow_mut().flush_bound(bound);
        self.inner.publish();
        self.inner.committer.deliver(commit);
    }

    pub fn get_target_ticks(&self) -> TargetTicks {
        self.inner.sync.borrow().targets()
    }

    pub fn has_pending_commit(&self, bound: TickBound) -> bool {
        self.inner.sync.borrow().has_pending_commit(bound)
    }

    pub fn is_animating(&self) -> bool {
        self.inner.sync.borrow().is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.sync.borrow().state().is_dragging()
    }

    /// Teardown: cancel pending timers and frames and drop observers.
    pub fn dispose(&self) {
        self.inner.sync.borrow_mut().dispose();
        self.inner.observers.borrow_mut().clear();
    }
}
