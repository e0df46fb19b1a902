use std::sync::Mutex;
use tick_range_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use tick_range_wasm::infrastructure::scheduler::ManualScheduler;
use tick_range_wasm::{RangeCommitter, RangeProps, SyncConfig, TickRangeController};

static LINES: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Logger for CaptureLogger {
    fn log(&self, entry: LogEntry) {
        let line = format!("{} {}", entry.component, entry.message);
        LINES.lock().unwrap().push((entry.level, line));
    }
}

fn controller(props: RangeProps) -> TickRangeController<ManualScheduler> {
    TickRangeController::new(SyncConfig::default(), props, ManualScheduler::new(), RangeCommitter::new(|_| {}, |_| {}))
}

fn logged(level: LogLevel, needle: &str) -> bool {
    LINES.lock().unwrap().iter().any(|(l, line)| *l == level && line.contains(needle))
}

// one test per binary: the logger is process-wide
#[cfg(debug_assertions)]
#[test]
fn scheduling_and_ignored_setters_are_logged() {
    init_logger(Box::new(CaptureLogger));

    let idle = controller(RangeProps::new(Some(0), Some(10), false));
    idle.debounced_set_lower_tick(5);
    assert!(logged(LogLevel::Debug, "domain::TickRangeSynchronizer ignoring lower target 5: not dragging"));

    let dragging = controller(RangeProps::new(Some(0), Some(10), true));
    dragging.debounced_set_upper_tick(40);
    assert!(logged(LogLevel::Trace, "infrastructure::ManualScheduler task 1: upper debounce due at 150 ms"));

    dragging.debounced_set_upper_tick(45);
    assert!(logged(LogLevel::Trace, "infrastructure::ManualScheduler cancelled task 1"));

    dragging.dispose();
    assert!(logged(LogLevel::Debug, "domain::TickRangeSynchronizer disposed"));
}
