//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// StockBeacon push worker - background message-to-notification delivery
#[derive(Parser, Debug)]
#[command(name = "stock-beacon")]
#[command(version)]
#[command(about = "Background push-notification worker for the StockBeacon inventory app")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the messaging config file
    #[arg(short = 'c', long, value_name = "FILE", env = "STOCK_BEACON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Application name shown on desktop notifications
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Print each received payload and shown notification to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Show config file path
    Path,
    /// Load and validate the config file
    Check,
}

/// Parsed worker options
#[derive(Debug, Clone)]
pub struct WorkerOptions {
    pub config_path: Option<PathBuf>,
    pub app_name: Option<String>,
    pub verbose: bool,
}
