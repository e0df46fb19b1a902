// Pure tick-range logic, free of browser APIs.
pub mod errors;
pub mod logging;
pub mod sync;
pub mod ticks;
