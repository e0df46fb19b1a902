pub mod hooks;
pub mod wasm_api;

pub use hooks::{DebouncedTicks, use_debounced_ticks};
pub use wasm_api::WasmTickRange;
