use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel};

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod slider_view;

pub use application::{RangeCommitter, TickRangeController};
pub use domain::errors::{SyncError, SyncResult};
pub use domain::sync::{SyncConfig, TickRangeSynchronizer};
pub use domain::ticks::{RangeProps, TargetTicks, Tick, TickBound, TickSnapshot};

/// Browser entry point: console logging and readable panics
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(LogLevel::Debug)));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider));

    log_info!(LogComponent::Presentation("initialize"), "tick range synchronizer ready");
}
