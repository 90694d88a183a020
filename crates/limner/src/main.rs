//! Limner binary: prompt in, rendered markdown out.

mod cli;

use clap::Parser;
use cli::Cli;
use limner_models::OpenAICompatibleClient;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli::init_tracing(&cli.log_file)?;

    let config = cli.client_config()?;
    info!(url = %config.base_url(), "Starting Limner");

    let driver = Arc::new(OpenAICompatibleClient::new(config));
    limner_tui::run(driver).await?;

    info!("Limner exited");
    Ok(())
}
