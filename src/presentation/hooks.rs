use leptos::*;

use crate::application::{RangeCommitter, TickRangeController};
use crate::domain::sync::SyncConfig;
use crate::domain::ticks::{RangeProps, TargetTicks, Tick, TickBound};
use crate::infrastructure::scheduler::BrowserScheduler;
use crate::slider_view::SliderView;

/// Reactive handle returned by [`use_debounced_ticks`].
#[derive(Clone)]
pub struct DebouncedTicks {
    pub internal_lower_tick: ReadSignal<Option<f64>>,
    pub internal_upper_tick: ReadSignal<Option<f64>>,
    controller: TickRangeController<BrowserScheduler>,
}

impl DebouncedTicks {
    pub fn debounced_set_lower_tick(&self, tick: i32) {
        self.controller.debounced_set_lower_tick(tick);
    }

    pub fn debounced_set_upper_tick(&self, tick: i32) {
        self.controller.debounced_set_upper_tick(tick);
    }

    /// Pointer-move helper: map the pointer to a usable tick and retarget `bound`.
    pub fn drag_handle_to(&self, bound: TickBound, pointer_px: f64, view: &SliderView) -> Tick {
        let tick = view.px_to_tick(pointer_px);
        self.controller.debounced_set_tick(bound, tick);
        tick
    }

    pub fn flush_debounced_values(&self) {
        self.controller.flush_debounced_values();
    }

    pub fn get_target_ticks(&self) -> TargetTicks {
        self.controller.get_target_ticks()
    }
}

/// Smooth, debounced tick pair for a price-range slider.
///
/// While `is_dragging` is false the displayed ticks mirror `lower_tick` and
/// `upper_tick`. During a drag, setters move the targets, the displayed
/// values ease toward them once per animation frame, and `set_*_tick` is
/// called after a quiet period or on flush.
pub fn use_debounced_ticks(
    lower_tick: Signal<Option<i32>>,
    upper_tick: Signal<Option<i32>>,
    set_lower_tick: Callback<i32>,
    set_upper_tick: Callback<i32>,
    is_dragging: Signal<bool>,
    config: SyncConfig,
) -> DebouncedTicks {
    let initial = RangeProps::new(
        lower_tick.get_untracked(),
        upper_tick.get_untracked(),
        is_dragging.get_untracked(),
    );
    let committer = RangeCommitter::new(
        move |tick: Tick| set_lower_tick.call(tick.value()),
        move |tick: Tick| set_upper_tick.call(tick.value()),
    );
    let controller = TickRangeController::new(config, initial, BrowserScheduler, committer);

    let (internal_lower_tick, set_internal_lower_tick) =
        create_signal(initial.lower_tick.map(|tick| tick.as_f64()));
    let (internal_upper_tick, set_internal_upper_tick) =
        create_signal(initial.upper_tick.map(|tick| tick.as_f64()));
    controller.subscribe(move |snapshot| {
        set_internal_lower_tick.set(snapshot.internal_lower_tick);
        set_internal_upper_tick.set(snapshot.internal_upper_tick);
    });

    let resync = controller.clone();
    create_effect(move |_| {
        resync.sync_props(RangeProps::new(lower_tick.get(), upper_tick.get(), is_dragging.get()));
    });

    let teardown = controller.clone();
    on_cleanup(move || teardown.dispose());

    DebouncedTicks { internal_lower_tick, internal_upper_tick, controller }
}
