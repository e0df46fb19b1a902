use derive_more::Display;
use once_cell::sync::OnceCell;
use std::fmt;
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Layer and type a log line comes from, printed as `layer::Name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "domain::{}", _0)]
    Domain(&'static str),
    #[display(fmt = "application::{}", _0)]
    Application(&'static str),
    #[display(fmt = "infrastructure::{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "presentation::{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

/// Clock used to stamp log entries
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for log entries. `enabled` is checked before a message is formatted.
pub trait Logger: Send + Sync {
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, entry: LogEntry);
}

static GLOBAL_LOGGER: OnceCell<Box<dyn Logger>> = OnceCell::new();
static GLOBAL_TIME_PROVIDER: OnceCell<Box<dyn TimeProvider>> = OnceCell::new();

/// Install the process-wide logger. Only the first call wins.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Install the process-wide clock. Only the first call wins.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .unwrap_or(&CounterTimeProvider)
}

/// Entry point of the `log_*!` macros.
pub fn emit(level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    let logger = get_logger();
    if !logger.enabled(level) {
        return;
    }
    logger.log(LogEntry {
        timestamp: get_time_provider().current_timestamp(),
        level,
        component,
        message: args.to_string(),
    });
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _entry: LogEntry) {}
}

/// Monotonic counter standing in for a clock outside the browser
struct CounterTimeProvider;

impl TimeProvider for CounterTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{}", timestamp)
    }
}

// trace and debug lines are only emitted by debug builds
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Trace, $component, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, format_args!($($arg)*))
    };
}
