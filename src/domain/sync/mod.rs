pub mod config;
pub mod scheduler;
pub mod state;
pub mod synchronizer;

pub use config::SyncConfig;
pub use scheduler::{Scheduler, SyncEvents};
pub use state::{BoundState, TickRangeState};
pub use synchronizer::TickRangeSynchronizer;
