pub mod scheduler;

/// Browser console and clock behind the domain logging traits
pub mod services {
    use wasm_bindgen::JsValue;

    use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

    /// Writes entries at or above `min_level` to the matching `console` method.
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new(min_level: LogLevel) -> Self {
            Self { min_level }
        }
    }

    impl Logger for ConsoleLogger {
        fn enabled(&self, level: LogLevel) -> bool {
            level >= self.min_level
        }

        fn log(&self, entry: LogEntry) {
            let line = JsValue::from_str(&format!(
                "{} {:<5} {} {}",
                BrowserTimeProvider.format_timestamp(entry.timestamp),
                entry.level.label(),
                entry.component,
                entry.message
            ));
            match entry.level {
                LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
                LogLevel::Info => web_sys::console::info_1(&line),
                LogLevel::Warn => web_sys::console::warn_1(&line),
                LogLevel::Error => web_sys::console::error_1(&line),
            }
        }
    }

    /// Wall clock backed by `Date.now()`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTimeProvider;

    impl TimeProvider for BrowserTimeProvider {
        fn current_timestamp(&self) -> u64 {
            js_sys::Date::now() as u64
        }

        fn format_timestamp(&self, timestamp: u64) -> String {
            let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                date.get_hours(),
                date.get_minutes(),
                date.get_seconds(),
                date.get_milliseconds()
            )
        }
    }
}
