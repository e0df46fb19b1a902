pub mod browser;
pub mod manual;

pub use browser::BrowserScheduler;
pub use manual::{ManualScheduler, ManualTask};
