use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod data;
mod db;
mod forms;
mod models;
mod table;
mod ui;
mod utils;

use app::state::AppState;
use config::settings::Settings;
use ui::app::TuiApp;

#[derive(Parser, Debug)]
#[command(name = "payroll-admin")]
#[command(about = "Terminal dashboard for employees and service bookings")]
#[command(version)]
struct Args {
    /// Database path (use :memory: for in-memory)
    #[arg(short, long)]
    database: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Populate an empty database with demo records
    #[arg(long)]
    seed: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    write_config: bool,
}

/// Log to a file; the terminal is in raw mode while the UI runs
fn init_logging(settings: &Settings) -> Result<()> {
    let path = Path::new(&settings.log_file);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load settings
    let settings = Settings::load(args.config.as_deref())?;
    if args.write_config {
        settings.save(args.config.as_deref())?;
        let path = args
            .config
            .map(PathBuf::from)
            .unwrap_or_else(Settings::default_config_path);
        println!("Wrote settings to {}", path.display());
        return Ok(());
    }
    init_logging(&settings)?;

    // Initialize database
    let db_path = args.database.as_deref().unwrap_or(&settings.database_path);
    let db = db::Database::open(db_path).with_context(|| format!("opening database {}", db_path))?;
    if args.seed {
        db.seed_demo_data()?;
    }

    // Create shared application state
    let state = Arc::new(AppState::new(db, settings));

    // Run TUI (blocks until user quits)
    let mut tui = TuiApp::new(state)?;
    let result = tui.run().await;
    drop(tui);

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:#}", e);
    }
    result
}
