pub mod controller;

pub use controller::{RangeCommitter, TickRangeController};
