mod api;
mod app;
mod cli;
mod config;
mod domain;
mod infrastructure;
mod presentation;
mod session;
#[cfg(test)]
mod testing;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use infrastructure::{directories, logging, shutdown};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    let mut config = config::load_config()?;
    if let Some(api_url) = &cli.api_url {
        config.api.base_url = config::parse_base_url(api_url)?;
    }

    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let shutdown = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = app::ClassifierApp::initialize(config, shutdown)?;
    match app.run(cli.command).await? {
        app::RunOutcome::Completed(code) => Ok(code),
        // A pending stdin read would keep the runtime from shutting down.
        app::RunOutcome::Interrupted => std::process::exit(130),
    }
}
