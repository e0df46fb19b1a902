use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::application::{RangeCommitter, TickRangeController};
use crate::domain::errors::SyncError;
use crate::domain::logging::LogComponent;
use crate::domain::sync::SyncConfig;
use crate::domain::ticks::{RangeProps, Tick, TickBound};
use crate::infrastructure::scheduler::BrowserScheduler;
use crate::{log_error, log_warn};

/// Tick range synchronizer for plain JavaScript hosts
#[wasm_bindgen]
pub struct WasmTickRange {
    controller: TickRangeController<BrowserScheduler>,
}

#[wasm_bindgen]
impl WasmTickRange {
    #[wasm_bindgen(constructor)]
    pub fn new(
        lower_tick: Option<i32>,
        upper_tick: Option<i32>,
        set_lower_tick: js_sys::Function,
        set_upper_tick: js_sys::Function,
        config_json: Option<String>,
    ) -> Result<WasmTickRange, JsValue> {
        let config = match config_json {
            Some(json) => SyncConfig::from_json(&json).map_err(|err| {
                log_warn!(LogComponent::Presentation("WasmTickRange"), "rejected config: {}", err);
                JsValue::from_str(&err.to_string())
            })?,
            None => SyncConfig::default(),
        };

        let committer = RangeCommitter::new(
            js_commit(set_lower_tick, TickBound::Lower),
            js_commit(set_upper_tick, TickBound::Upper),
        );
        let props = RangeProps::new(lower_tick, upper_tick, false);
        Ok(Self { controller: TickRangeController::new(config, props, BrowserScheduler, committer) })
    }

    #[wasm_bindgen(js_name = syncProps)]
    pub fn sync_props(&self, lower_tick: Option<i32>, upper_tick: Option<i32>, is_dragging: bool) {
        self.controller.sync_props(RangeProps::new(lower_tick, upper_tick, is_dragging));
    }

    #[wasm_bindgen(getter, js_name = internalLowerTick)]
    pub fn internal_lower_tick(&self) -> Option<f64> {
        self.controller.internal_lower_tick()
    }

    #[wasm_bindgen(getter, js_name = internalUpperTick)]
    pub fn internal_upper_tick(&self) -> Option<f64> {
        self.controller.internal_upper_tick()
    }

    #[wasm_bindgen(js_name = debouncedSetLowerTick)]
    pub fn debounced_set_lower_tick(&self, tick: i32) {
        self.controller.debounced_set_lower_tick(tick);
    }

    #[wasm_bindgen(js_name = debouncedSetUpperTick)]
    pub fn debounced_set_upper_tick(&self, tick: i32) {
        self.controller.debounced_set_upper_tick(tick);
    }

    #[wasm_bindgen(js_name = flushDebouncedValues)]
    pub fn flush_debounced_values(&self) {
        self.controller.flush_debounced_values();
    }

    /// `{ lowerTick, upperTick }`, `null` for bounds not loaded yet
    #[wasm_bindgen(js_name = getTargetTicks)]
    pub fn get_target_ticks(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.controller.get_target_ticks()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Register `callback({ internalLowerTick, internalUpperTick })`, invoked once per frame.
    #[wasm_bindgen(js_name = onFrame)]
    pub fn on_frame(&self, callback: js_sys::Function) {
        self.controller.subscribe(move |snapshot| {
            let payload = match JsValue::from_serde(&snapshot) {
                Ok(payload) => payload,
                Err(err) => {
                    log_warn!(LogComponent::Presentation("WasmTickRange"), "snapshot encoding failed: {}", err);
                    return;
                }
            };
            if let Err(err) = callback.call1(&JsValue::NULL, &payload) {
                log_warn!(LogComponent::Presentation("WasmTickRange"), "frame callback threw: {:?}", err);
            }
        });
    }

    pub fn dispose(&self) {
        self.controller.dispose();
    }
}

fn js_commit(callback: js_sys::Function, bound: TickBound) -> impl Fn(Tick) + 'static {
    move |tick: Tick| {
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from(tick.value())) {
            let error = SyncError::Callback(format!("{:?}", err));
            log_error!(LogComponent::Presentation("WasmTickRange"), "set {} tick failed: {}", bound, error);
        }
    }
}
