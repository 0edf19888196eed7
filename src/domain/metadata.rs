use chrono::Local;
use serde::{Deserialize, Serialize};

/// Describes the refresh run that produced the published dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshMetadata {
    pub total_cities: usize,
    pub last_updated: String,
    pub live_adjustment: f64,
    pub signal_reachable: bool,
    pub version: String,
}

impl RefreshMetadata {
    pub fn new(total_cities: usize, live_adjustment: f64, signal_reachable: bool) -> Self {
        Self {
            total_cities,
            last_updated: Local::now().to_rfc3339(),
            live_adjustment,
            signal_reachable,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
