//! Dashboard command - serve the web dashboard

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use futures_gateway::OrderGateway;
use tracing::info;

use crate::config::DashboardSettings;
use crate::dashboard::{create_router, AppState};

/// Arguments for the dashboard command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DashboardArgs {
    /// Bind address (overrides `dashboard.bind`)
    #[arg(long)]
    pub bind: Option<String>,
}

/// Execute the dashboard command
pub async fn execute(
    gateway: Arc<OrderGateway>,
    settings: &DashboardSettings,
    args: DashboardArgs,
) -> Result<()> {
    let bind = args.bind.unwrap_or_else(|| settings.bind.clone());
    let router = create_router(AppState::new(gateway, settings));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind dashboard to {}", bind))?;

    info!("Dashboard listening on http://{}", bind);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Dashboard server failed")?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
