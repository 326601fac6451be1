//! sales-dashboard: a keyboard-driven terminal sales dashboard.
//!
//! Shows a sales trend for a selectable period, a category breakdown and
//! animated KPI counters, with a simulated refresh and CSV export.

mod app;
mod cli;
mod dashboard;
mod data;
mod error;
mod format;
mod ui;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use cli::{AppConfig, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to a file while the dashboard owns the terminal. Without a file,
/// nothing is logged.
fn init_file_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("Failed to create log file: {path:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Show {
            period,
            export_dir,
            tick_ms,
            log_file,
        } => {
            let config = AppConfig::from_show_command(period, export_dir, tick_ms, log_file);
            init_file_logging(config.log_file.as_deref())?;

            // Run the TUI application
            app::run(config)?;
        }
        Commands::Export { period, export_dir } => {
            init_stderr_logging();
            let dir = cli::resolve_export_dir(export_dir);
            let today = chrono::Local::now().date_naive();
            let path = dashboard::export::export_to_dir(&dir, today, period)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
