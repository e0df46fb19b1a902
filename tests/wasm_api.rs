#![cfg(feature = "render")]
use gloo::utils::format::JsValueSerdeExt;
use gloo_timers::future::sleep;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tick_range_wasm::presentation::WasmTickRange;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// JS function that records what it is called with; keep the closure alive for the test.
fn recorder<T: 'static>(
    decode: impl Fn(JsValue) -> T + 'static,
) -> (js_sys::Function, Rc<RefCell<Vec<T>>>, Closure<dyn Fn(JsValue)>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let closure = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| sink.borrow_mut().push(decode(value)));
    let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    (function, calls, closure)
}

fn noop() -> js_sys::Function {
    js_sys::Function::new_no_args("")
}

fn tick(value: JsValue) -> i32 {
    value.as_f64().map(|v| v as i32).unwrap_or(i32::MIN)
}

#[wasm_bindgen_test]
fn constructor_rejects_bad_config() {
    let overshoot = WasmTickRange::new(Some(0), Some(10), noop(), noop(), Some(r#"{ "maxLerp": 1.5 }"#.into()));
    assert!(overshoot.is_err());

    let malformed = WasmTickRange::new(Some(0), Some(10), noop(), noop(), Some("{ debounceMs".into()));
    assert!(malformed.is_err());

    assert!(WasmTickRange::new(Some(0), Some(10), noop(), noop(), None).is_ok());
}

#[wasm_bindgen_test]
fn target_ticks_use_null_for_unloaded_bounds() {
    let range = WasmTickRange::new(Some(-5), None, noop(), noop(), None).unwrap();
    let targets: Value = range.get_target_ticks().unwrap().into_serde().unwrap();
    assert_eq!(targets, json!({ "lowerTick": -5, "upperTick": null }));
    assert_eq!(range.internal_upper_tick(), None);
}

#[wasm_bindgen_test(async)]
async fn frames_report_snapshots_and_commit_after_quiet_period() {
    let (set_upper, commits, _commit_closure) = recorder(tick);
    let (on_frame, frames, _frame_closure) = recorder(|payload: JsValue| payload.into_serde::<Value>().unwrap());
    let range =
        WasmTickRange::new(Some(0), Some(100), noop(), set_upper, Some(r#"{ "debounceMs": 20 }"#.into())).unwrap();

    range.sync_props(Some(0), Some(100), true);
    range.on_frame(on_frame);
    range.debounced_set_upper_tick(130);
    sleep(Duration::from_millis(300)).await;

    assert_eq!(*commits.borrow(), vec![130]);
    assert_eq!(range.internal_upper_tick(), Some(130.0));
    let frames = frames.borrow();
    assert!(frames.len() > 1);
    assert_eq!(frames.last(), Some(&json!({ "internalLowerTick": 0, "internalUpperTick": 130 })));
    range.dispose();
}

#[wasm_bindgen_test(async)]
async fn dispose_stops_commits_and_frames() {
    let (set_lower, commits, _commit_closure) = recorder(tick);
    let (on_frame, frames, _frame_closure) = recorder(|_| ());
    let range = WasmTickRange::new(Some(0), Some(100), set_lower, noop(), None).unwrap();

    range.sync_props(Some(0), Some(100), true);
    range.on_frame(on_frame);
    range.debounced_set_lower_tick(-70);
    range.dispose();
    sleep(Duration::from_millis(300)).await;

    assert!(commits.borrow().is_empty());
    assert!(frames.borrow().is_empty());
    assert_eq!(range.internal_lower_tick(), Some(0.0));
}
