//! Futures Terminal CLI
//!
//! Provides commands for:
//! - `menu`: Interactive text menu (default)
//! - `dashboard`: Web dashboard

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use futures_gateway::exchange::Credentials;
use futures_gateway::logging::{init_logging, LogConfig};
use futures_gateway::OrderGateway;
use futures_terminal::cli::{Cli, Commands};
use futures_terminal::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging(LogConfig::from_env()).context("Failed to initialize logging")?;

    let settings = Settings::load(cli.config.as_deref())
        .context("Failed to load settings")?
        .with_live(cli.live);

    let credentials = Credentials::from_env(&settings.exchange.auth);
    let gateway = OrderGateway::initialize(&credentials, &settings.exchange)
        .await
        .context("Failed to connect to Binance Futures")?;
    let environment = settings.exchange.environment_name();

    match cli.selected_command() {
        Commands::Menu => {
            futures_terminal::cli::menu::execute(&gateway, environment).await?;
        }
        Commands::Dashboard(args) => {
            futures_terminal::cli::dashboard::execute(Arc::new(gateway), &settings.dashboard, args)
                .await?;
        }
    }

    info!("Shutting down");
    Ok(())
}
