use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;

use cli::Cli;
use config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // Logs go to stderr so they do not interleave with the prompts
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Onboard starting up");

    let cli = Cli::parse();
    cli.run(&settings).await
}
