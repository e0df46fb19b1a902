use gloo::render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use std::rc::Weak;
use std::time::Duration;

use crate::domain::logging::LogComponent;
use crate::domain::sync::{Scheduler, SyncEvents};
use crate::domain::ticks::TickBound;
use crate::log_trace;

/// Browser event-loop scheduler: `setTimeout` for debounce windows and
/// `requestAnimationFrame` for handle animation. Both gloo handles clear
/// themselves on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Timer = Timeout;
    type Frame = AnimationFrame;

    fn schedule_debounce(&self, bound: TickBound, delay: Duration, events: Weak<dyn SyncEvents>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        log_trace!(LogComponent::Infrastructure("BrowserScheduler"), "setTimeout({}) for {} bound", millis, bound);
        Timeout::new(millis, move || {
            if let Some(events) = events.upgrade() {
                events.debounce_elapsed(bound);
            }
        })
    }

    fn request_frame(&self, events: Weak<dyn SyncEvents>) -> AnimationFrame {
        request_animation_frame(move |_timestamp| {
            if let Some(events) = events.upgrade() {
                events.animation_frame();
            }
        })
    }
}
