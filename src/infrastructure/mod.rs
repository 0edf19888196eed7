mod clients;
mod storage;

pub use clients::signal::{
    LiveSignal, SignalClient, BASELINE_ADJUSTMENT, DEFAULT_SIGNAL_URL, LIVE_ADJUSTMENT,
};
pub use storage::fs_store::FileSystemStore;
