mod args;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sorter_core::{
    load_config, validate_config, Organizer, SanitizedConfig, TorrentClient, TransmissionClient,
};

use args::Args;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // Printing only fails when stdout/stderr are gone
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(args).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = &args.config {
        info!("Loading configuration from {:?}", path);
    }
    let mut config = load_config(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load config from {:?}", path),
        None => "Failed to load config".to_string(),
    })?;
    args.apply(&mut config);

    validate_config(&config).context("Configuration validation failed")?;
    info!("Configuration: {:?}", SanitizedConfig::from(&config));

    let client: Arc<dyn TorrentClient> = Arc::new(
        TransmissionClient::new(config.transmission.clone())
            .context("Failed to create Transmission client")?,
    );
    info!("Using torrent client: {}", client.name());

    let organizer = Organizer::from_config(client, &config.output);
    organizer.run().await.context("Organizer run failed")?;

    Ok(())
}
