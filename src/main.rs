use anyhow::Result;
use chrono::Utc;
use clap::Parser;

mod api;
mod cli;
mod config;
mod db;
mod services;
mod types;

use crate::api::client::DexScreenerClient;
use crate::cli::Cli;
use crate::config::Settings;
use crate::services::{monitor, snapshot};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    let out_dir = cli.outdir.clone().unwrap_or_else(|| settings.output_dir.clone());

    let client = DexScreenerClient::new(
        &settings.base_url,
        &settings.user_agent,
        settings.request_timeout,
        settings.rate_limit_per_minute,
        cli.fetch_mode(),
    )?;
    tracing::debug!("Using {} with {:?}", settings.base_url, cli.fetch_mode());

    let Some(interval) = cli.poll_interval() else {
        snapshot::take_snapshot(&client, &out_dir, Utc::now()).await;
        return Ok(());
    };

    tokio::select! {
        _ = monitor::start_collecting(&client, &out_dir, interval) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("[STOP] Interrupted by user.");
        }
    }

    Ok(())
}
