use crate::config::cli::Args;
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use reqwest::Client;
use std::time::Duration;

pub mod cli;

pub use cli::Command;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("cityrank/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { args, http_client })
    }

    pub fn store(&self) -> FileSystemStore {
        FileSystemStore::new(&self.args.source, &self.args.output)
    }
}
