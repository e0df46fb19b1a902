use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::domain::logging::LogComponent;
use crate::domain::sync::{Scheduler, SyncEvents};
use crate::domain::ticks::TickBound;
use crate::log_trace;

struct TimerEntry {
    due_ms: u64,
    bound: TickBound,
    events: Weak<dyn SyncEvents>,
}

#[derive(Default)]
struct ManualQueue {
    now_ms: u64,
    next_id: u64,
    timers: BTreeMap<u64, TimerEntry>,
    frames: BTreeMap<u64, Weak<dyn SyncEvents>>,
}

impl ManualQueue {
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Deterministic scheduler driven by hand: a virtual millisecond clock for
/// debounce timers and an explicit "next frame" pump.
///
/// Clones share the same queue, so a test can keep one clone and hand the
/// other to the synchronizer. Frames do not advance the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

/// Handle to a queued timer or frame; dropping it removes the entry.
pub struct ManualTask {
    id: u64,
    queue: Weak<RefCell<ManualQueue>>,
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            let mut queue = queue.borrow_mut();
            let removed = queue.timers.remove(&self.id).is_some() | queue.frames.remove(&self.id).is_some();
            if removed {
                log_trace!(LogComponent::Infrastructure("ManualScheduler"), "cancelled task {}", self.id);
            }
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        Duration::from_millis(self.queue.borrow().now_ms)
    }

    pub fn pending_timers(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.queue.borrow().frames.len()
    }

    /// Move the clock forward, firing due timers one at a time in due order.
    pub fn advance_by(&self, duration: Duration) {
        let deadline = self.queue.borrow().now_ms + duration.as_millis() as u64;
        // the queue borrow is released before each callback so it can re-arm or cancel
        while let Some(entry) = self.pop_due_timer(deadline) {
            if let Some(events) = entry.events.upgrade() {
                events.debounce_elapsed(entry.bound);
            }
        }
        self.queue.borrow_mut().now_ms = deadline;
    }

    /// Fire every frame requested before this call. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let batch: Vec<u64> = self.queue.borrow().frames.keys().copied().collect();
        let mut fired = 0;
        for id in batch {
            let events = self.queue.borrow_mut().frames.remove(&id);
            if let Some(events) = events.and_then(|weak| weak.upgrade()) {
                events.animation_frame();
                fired += 1;
            }
        }
        fired
    }

    /// Pump frames until nothing is requested any more or `limit` frames ran.
    pub fn run_frames_until_idle(&self, limit: usize) -> usize {
        let mut frames = 0;
        while frames < limit && self.pending_frames() > 0 {
            self.run_frame();
            frames += 1;
        }
        frames
    }

    fn pop_due_timer(&self, deadline: u64) -> Option<TimerEntry> {
        let mut queue = self.queue.borrow_mut();
        let id = queue
            .timers
            .iter()
            .filter(|(_, entry)| entry.due_ms <= deadline)
            .min_by_key(|(id, entry)| (entry.due_ms, **id))
            .map(|(id, _)| *id)?;
        let entry = queue.timers.remove(&id)?;
        queue.now_ms = queue.now_ms.max(entry.due_ms);
        Some(entry)
    }

    fn task(&self, id: u64) -> ManualTask {
        ManualTask { id, queue: Rc::downgrade(&self.queue) }
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTask;
    type Frame = ManualTask;

    fn schedule_debounce(&self, bound: TickBound, delay: Duration, events: Weak<dyn SyncEvents>) -> ManualTask {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.allocate_id();
            let due_ms = queue.now_ms + delay.as_millis() as u64;
            queue.timers.insert(id, TimerEntry { due_ms, bound, events });
            log_trace!(
                LogComponent::Infrastructure("ManualScheduler"),
                "task {}: {} debounce due at {} ms",
                id,
                bound,
                due_ms
            );
            id
        };
        self.task(id)
    }

    fn request_frame(&self, events: Weak<dyn SyncEvents>) -> ManualTask {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.allocate_id();
            queue.frames.insert(id, events);
            id
        };
        self.task(id)
    }
}
