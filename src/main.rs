mod api;
mod cli;
mod config;
mod error;
mod registry;
mod server;
mod simulator;
mod state_machine;
mod ui;
mod watch;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::MockConfig;

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = MockConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            server::run(&config).await?;
        }
        Command::Watch {
            description,
            url,
            interval_ms,
        } => {
            if let Some(url) = url {
                config.base_url = url;
            }
            if let Some(interval_ms) = interval_ms {
                config.poll_interval_ms = interval_ms;
            }
            watch_job(&config, &description).await?;
        }
        Command::Simulate { elapsed } => {
            let elapsed = Duration::try_from_secs_f64(elapsed)
                .with_context(|| format!("elapsed must be a non-negative number of seconds, got {elapsed}"))?;
            let payload = simulator::compute_status(elapsed);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn watch_job(config: &MockConfig, description: &str) -> Result<()> {
    let client = api::OrchestratorClient::new(&config.base_url)?;
    let watcher = watch::JobWatcher::from_config(config);
    let progress = ui::JobProgress::start(description);

    match watcher
        .watch(&client, description, |payload| progress.update(payload))
        .await
    {
        Ok(report) => {
            progress.complete(&report);
            Ok(())
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}
