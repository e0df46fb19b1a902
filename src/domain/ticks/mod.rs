pub mod value_objects;

pub use value_objects::{BoundPair, Commit, RangeProps, TargetTicks, Tick, TickBound, TickSnapshot};
