use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

mod controller;
mod handlers;
mod logging;
mod profile;
mod server;
mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::profile::{Overrides, resolve_config};
use self::state::AppState;

/// Text summarizer and dictionary lookup over HTTP
#[derive(Debug, Parser)]
#[command(name = "glossa", version)]
struct Cli {
    /// JSON profile to load instead of environment variables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5000
    #[arg(long)]
    bind: Option<String>,

    /// WordNet `dict/` directory
    #[arg(long)]
    wordnet_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        Overrides {
            bind: cli.bind,
            wordnet_dir: cli.wordnet_dir,
        },
    )?;
    logging::init(config.log_json);

    let state = Arc::new(AppState::build(config).await?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks().await?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("server task exited"),
                Ok(Err(e)) => tracing::error!("server task failed: {e}"),
                Err(e) => tracing::error!("server task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}
