use cityrank::config::cli::Args;
use cityrank::config::{Command, Config};
use cityrank::domain::Storage;
use cityrank::error::{CityError, Result};
use cityrank::infrastructure::SignalClient;
use cityrank::services::render::render_listing;
use cityrank::services::view::ViewState;
use cityrank::services::{RefreshService, SignalSource};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, warn, Level};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    let parsed = log_level.parse::<Level>();
    tracing_subscriber::fmt()
        .with_max_level(*parsed.as_ref().unwrap_or(&Level::INFO))
        .with_target(false)
        .init();

    if parsed.is_err() {
        warn!("Unknown log level '{log_level}', falling back to info");
    }
}

async fn run(args: Args) -> Result<()> {
    let command = args.resolved_command();
    let config = Config::new(args)?;
    let store = config.store();

    match command {
        Command::Refresh => {
            let signal = if config.args.offline {
                SignalSource::Offline
            } else {
                SignalSource::Probe {
                    client: SignalClient::new(config.http_client.clone()),
                    url: config.args.signal_url.clone(),
                }
            };

            RefreshService::new(Arc::new(store), signal)
                .refresh()
                .await?;
        }
        Command::View { query, sort } => {
            let dataset = store
                .load_published()?
                .ok_or_else(|| CityError::DatasetNotFound(store.output_path().to_path_buf()))?;

            let listing = ViewState::new(query, sort).apply(&dataset);
            print!("{}", render_listing(&listing));
        }
    }

    Ok(())
}
