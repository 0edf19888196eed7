use crate::domain::SortKey;
use crate::infrastructure::DEFAULT_SIGNAL_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Master list of raw city facts
    #[arg(long, env = "CITYRANK_SOURCE", default_value = "data/source.json", global = true)]
    pub source: PathBuf,

    /// Published dataset consumed by the view
    #[arg(long, env = "CITYRANK_OUTPUT", default_value = "data/cities.json", global = true)]
    pub output: PathBuf,

    /// URL probed to decide whether the live rent adjustment applies
    #[arg(long, env = "CITYRANK_SIGNAL_URL", default_value = DEFAULT_SIGNAL_URL, global = true)]
    pub signal_url: String,

    /// Skip the probe and use the baseline adjustment
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recompute the published dataset from the source list (default)
    Refresh,
    /// Print the published dataset, filtered and sorted
    View {
        /// Case-insensitive match against city name or country
        #[arg(long, short, default_value = "")]
        query: String,

        /// Sort order
        #[arg(long, short, value_enum, default_value_t = SortKey::Total)]
        sort: SortKey,
    },
}

impl Args {
    /// No subcommand means a refresh with default settings.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Refresh)
    }
}
