use std::rc::Weak;
use std::time::Duration;

use crate::domain::ticks::TickBound;

/// Receiver of scheduled callbacks.
///
/// Schedulers only ever hold a [`Weak`] reference to it, so a torn-down
/// receiver is simply skipped when a late callback arrives.
pub trait SyncEvents {
    fn animation_frame(&self);
    fn debounce_elapsed(&self, bound: TickBound);
}

/// Source of cancellable deferred work.
///
/// Dropping a returned handle cancels the task. Re-arming is therefore just
/// replacing the stored handle, and teardown is dropping every handle.
pub trait Scheduler: 'static {
    type Timer: 'static;
    type Frame: 'static;

    fn schedule_debounce(&self, bound: TickBound, delay: Duration, events: Weak<dyn SyncEvents>) -> Self::Timer;

    fn request_frame(&self, events: Weak<dyn SyncEvents>) -> Self::Frame;
}
