pub mod merge;
pub mod models;
pub mod overrides;

pub use merge::merge_overrides;
pub use models::{Mode, ModeStats, PartialModeStats};
