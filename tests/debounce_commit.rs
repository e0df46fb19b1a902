use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tick_range_wasm::infrastructure::scheduler::ManualScheduler;
use tick_range_wasm::{RangeCommitter, RangeProps, SyncConfig, Tick, TickBound, TickRangeController};

type CommitLog = Rc<RefCell<Vec<(TickBound, i32)>>>;

fn controller(props: RangeProps) -> (TickRangeController<ManualScheduler>, ManualScheduler, CommitLog) {
    let scheduler = ManualScheduler::new();
    let commits: CommitLog = Rc::new(RefCell::new(Vec::new()));
    let (lower_log, upper_log) = (commits.clone(), commits.clone());
    let committer = RangeCommitter::new(
        move |tick: Tick| lower_log.borrow_mut().push((TickBound::Lower, tick.value())),
        move |tick: Tick| upper_log.borrow_mut().push((TickBound::Upper, tick.value())),
    );
    let controller = TickRangeController::new(SyncConfig::default(), props, scheduler.clone(), committer);
    (controller, scheduler, commits)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn last_write_wins_within_window() {
    let (controller, scheduler, commits) = controller(RangeProps::new(Some(0), Some(100), true));

    controller.debounced_set_lower_tick(5);
    scheduler.advance_by(ms(100));
    controller.debounced_set_lower_tick(9);
    scheduler.advance_by(ms(149));
    assert!(commits.borrow().is_empty());
    assert!(controller.has_pending_commit(TickBound::Lower));

    scheduler.advance_by(ms(1));
    assert_eq!(*commits.borrow(), vec![(TickBound::Lower, 9)]);
    assert!(!controller.has_pending_commit(TickBound::Lower));

    scheduler.advance_by(ms(1_000));
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn each_bound_has_its_own_window() {
    let (controller, scheduler, commits) = controller(RangeProps::new(Some(0), Some(100), true));

    controller.debounced_set_lower_tick(-10);
    scheduler.advance_by(ms(100));
    controller.debounced_set_upper_tick(120);
    scheduler.advance_by(ms(50));
    assert_eq!(*commits.borrow(), vec![(TickBound::Lower, -10)]);

    scheduler.advance_by(ms(100));
    assert_eq!(*commits.borrow(), vec![(TickBound::Lower, -10), (TickBound::Upper, 120)]);
}

#[test]
fn flush_commits_immediately_and_cancels_timer() {
    let (controller, scheduler, commits) = controller(RangeProps::new(Some(0), Some(10), true));

    controller.debounced_set_upper_tick(42);
    scheduler.run_frame();
    controller.flush_debounced_values();

    assert_eq!(*commits.borrow(), vec![(TickBound::Upper, 42)]);
    assert_eq!(controller.internal_upper_tick(), Some(42.0));
    assert_eq!(scheduler.pending_timers(), 0);
    assert_eq!(scheduler.pending_frames(), 0);

    scheduler.advance_by(ms(1_000));
    scheduler.run_frame();
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn flush_without_changes_commits_nothing() {
    let (controller, _scheduler, commits) = controller(RangeProps::new(Some(0), Some(10), true));
    controller.flush_debounced_values();
    assert!(commits.borrow().is_empty());
}

#[test]
fn flush_after_debounced_commit_does_not_repeat_it() {
    let (controller, scheduler, commits) = controller(RangeProps::new(Some(0), Some(10), true));

    controller.debounced_set_lower_tick(-3);
    scheduler.advance_by(ms(200));
    controller.flush_debounced_values();

    assert_eq!(*commits.borrow(), vec![(TickBound::Lower, -3)]);
    assert_eq!(controller.internal_lower_tick(), Some(-3.0));
}

#[test]
fn commit_callback_may_feed_the_value_back() {
    let scheduler = ManualScheduler::new();
    let slot: Rc<RefCell<Option<TickRangeController<ManualScheduler>>>> = Rc::new(RefCell::new(None));
    let upper = Rc::new(RefCell::new(10));
    let (feedback, upper_store) = (slot.clone(), upper.clone());
    let committer = RangeCommitter::new(
        |_| {},
        move |tick: Tick| {
            *upper_store.borrow_mut() = tick.value();
            if let Some(controller) = feedback.borrow().as_ref() {
                controller.sync_props(RangeProps::new(Some(0), Some(tick.value()), true));
            }
        },
    );
    let controller = TickRangeController::new(
        SyncConfig::default(),
        RangeProps::new(Some(0), Some(10), true),
        scheduler.clone(),
        committer,
    );
    *slot.borrow_mut() = Some(controller.clone());

    controller.debounced_set_upper_tick(30);
    scheduler.advance_by(ms(150));
    assert_eq!(*upper.borrow(), 30);

    controller.flush_debounced_values();
    controller.sync_props(RangeProps::new(Some(0), Some(30), false));
    assert_eq!(controller.internal_upper_tick(), Some(30.0));

    slot.borrow_mut().take();
}
