//! Command-line interface
//!
//! `menu` (the default) runs the interactive text menu; `dashboard` serves
//! the web dashboard.

pub mod dashboard;
pub mod menu;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Futures terminal CLI
#[derive(Parser, Debug)]
#[command(name = "futures-terminal")]
#[command(about = "Place, list and cancel Binance USDT-M futures orders")]
#[command(version)]
pub struct Cli {
    /// Configuration file path (default: config/default.toml, optional)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Trade on the live exchange instead of the testnet
    #[arg(long, global = true)]
    pub live: bool,

    /// Subcommand to run (defaults to `menu`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive text menu
    Menu,
    /// Serve the web dashboard
    Dashboard(dashboard::DashboardArgs),
}

impl Cli {
    /// The selected command, `menu` when none was given.
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }
}
