#![cfg(feature = "render")]
use gloo_timers::future::sleep;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tick_range_wasm::presentation::use_debounced_ticks;
use tick_range_wasm::{SyncConfig, Tick};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn recording(commits: &Rc<RefCell<Vec<i32>>>) -> Callback<i32> {
    let commits = commits.clone();
    Callback::new(move |tick: i32| commits.borrow_mut().push(tick))
}

#[wasm_bindgen_test(async)]
async fn drag_end_resyncs_through_the_effect() {
    let runtime = create_runtime();
    let commits = Rc::new(RefCell::new(Vec::new()));
    let (lower, _) = create_signal(Some(0));
    let (upper, _) = create_signal(Some(100));
    let (dragging, set_dragging) = create_signal(true);

    let ticks = use_debounced_ticks(
        lower.into(),
        upper.into(),
        recording(&commits),
        recording(&commits),
        dragging.into(),
        SyncConfig::default(),
    );
    ticks.debounced_set_lower_tick(60);
    sleep(Duration::from_millis(50)).await;
    let mid = ticks.internal_lower_tick.get_untracked();
    assert!(matches!(mid, Some(tick) if tick < 60.0), "mid-animation at {:?}", mid);

    set_dragging.set(false);
    sleep(Duration::from_millis(10)).await;
    assert_eq!(ticks.internal_lower_tick.get_untracked(), Some(0.0));
    assert_eq!(ticks.get_target_ticks().lower_tick, Some(Tick::from(0)));

    sleep(Duration::from_millis(300)).await;
    assert!(commits.borrow().is_empty());
    runtime.dispose();
}

#[wasm_bindgen_test(async)]
async fn disposing_the_owner_cancels_pending_commits() {
    let runtime = create_runtime();
    let commits = Rc::new(RefCell::new(Vec::new()));

    let mount = as_child_of_current_owner(|commits: Rc<RefCell<Vec<i32>>>| {
        let (lower, _) = create_signal(Some(0));
        let (upper, _) = create_signal(Some(100));
        let (dragging, _) = create_signal(true);
        let ticks = use_debounced_ticks(
            lower.into(),
            upper.into(),
            recording(&commits),
            recording(&commits),
            dragging.into(),
            SyncConfig { debounce_ms: 20, ..SyncConfig::default() },
        );
        ticks.debounced_set_upper_tick(400);
        ticks.debounced_set_lower_tick(-400);
    });
    let ((), disposer) = mount(commits.clone());
    drop(disposer);

    sleep(Duration::from_millis(200)).await;
    assert!(commits.borrow().is_empty());
    runtime.dispose();
}
