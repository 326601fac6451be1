//! Command-line interface argument parsing for sales-dashboard.
//!
//! - `sales-dashboard show --period 7D`
//! - `sales-dashboard export --export-dir ./out`

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::data::Period;

/// Environment variable overriding the export directory
pub const EXPORT_DIR_ENV: &str = "SALES_DASHBOARD_EXPORT_DIR";

/// A terminal sales dashboard with animated KPIs, trend and category charts.
#[derive(Parser, Debug)]
#[command(name = "sales-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the dashboard
    Show {
        /// Initial trend period (7D, 30D or 90D)
        #[arg(short, long, default_value = "30D")]
        period: Period,

        /// Directory exports are written to.
        /// Defaults to $SALES_DASHBOARD_EXPORT_DIR, then the download directory
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Counter animation tick in milliseconds
        #[arg(long, default_value = "20")]
        tick_ms: u64,

        /// Write logs to this file (the terminal is busy with the dashboard)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Write the CSV export without opening the dashboard
    Export {
        /// Period recorded in the export
        #[arg(short, long, default_value = "30D")]
        period: Period,

        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub period: Period,
    pub export_dir: PathBuf,
    pub tick_interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Create AppConfig from the `show` command's arguments
    pub fn from_show_command(
        period: Period,
        export_dir: Option<PathBuf>,
        tick_ms: u64,
        log_file: Option<PathBuf>,
    ) -> Self {
        AppConfig {
            period,
            export_dir: resolve_export_dir(export_dir),
            tick_interval: Duration::from_millis(tick_ms.max(1)),
            log_file,
        }
    }
}

/// Pick the export directory: explicit flag, then environment, then the
/// user's download directory, then the working directory.
pub fn resolve_export_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(EXPORT_DIR_ENV).map(PathBuf::from))
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
