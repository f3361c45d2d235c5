use anyhow::Result;
use blockfrost_sdk::{BlockfrostClient, cli::Args, logging::setup_tracing};
use clap::Parser;
use dotenvy::dotenv;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    let config = args.resolve_config()?;

    // Logging
    setup_tracing(config.log_level.into());

    info!(
        "Starting {} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("GIT_REVISION")
    );

    let client = BlockfrostClient::new(&config)?;
    let cancel = CancellationToken::new();

    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal");
                cancel.cancel();
            }
        }
    });

    let output = args.command.run(&client, &cancel).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
