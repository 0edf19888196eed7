use reqwest::Client;
use tracing::{info, warn};

/// Rent multiplier when the signal cannot be reached.
pub const BASELINE_ADJUSTMENT: f64 = 1.0;
/// Rent multiplier applied when the signal answers (a flat 2% uplift).
pub const LIVE_ADJUSTMENT: f64 = 1.02;

pub const DEFAULT_SIGNAL_URL: &str =
    "https://raw.githubusercontent.com/datasets/gdp/master/README.md";

/// Outcome of probing the live economic signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSignal {
    pub reachable: bool,
    pub adjustment: f64,
}

impl LiveSignal {
    pub const fn offline() -> Self {
        Self {
            reachable: false,
            adjustment: BASELINE_ADJUSTMENT,
        }
    }

    pub const fn reachable() -> Self {
        Self {
            reachable: true,
            adjustment: LIVE_ADJUSTMENT,
        }
    }
}

pub struct SignalClient {
    client: Client,
}

impl SignalClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Single best-effort GET. Any failure, including a non-success status,
    /// falls back to the baseline adjustment.
    pub async fn probe(&self, url: &str) -> LiveSignal {
        info!("Fetching live economic indicators from {url}");

        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                info!("Live signal reachable, applying {LIVE_ADJUSTMENT}x rent adjustment");
                LiveSignal::reachable()
            }
            Ok(response) => {
                warn!(
                    "Live signal answered {}, using baseline adjustment",
                    response.status()
                );
                LiveSignal::offline()
            }
            Err(e) => {
                warn!("Live signal unreachable ({e}), using baseline adjustment");
                LiveSignal::offline()
            }
        }
    }
}
