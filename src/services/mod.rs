pub mod ranking;
pub mod refresh;
pub mod render;
pub mod scoring;
pub mod validation;
pub mod view;

pub use refresh::{RefreshService, RefreshSummary, SignalSource};
