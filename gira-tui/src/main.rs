mod app;
mod bootstrap;
mod cli;
mod config;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::GiraConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gira_core::MockBackend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => print_config_path(),
        Commands::Run => run(),
    }
}

fn print_config_path() -> Result<()> {
    let path = GiraConfig::config_path()?;
    if !path.exists() {
        GiraConfig::default().save()?;
    }
    println!("{}", path.display());
    Ok(())
}

fn run() -> Result<()> {
    let config = GiraConfig::load()?;
    init_tracing().context("Failed to initialize logging")?;
    tracing::info!("starting gira-tui");

    let mut app = app::App::new(MockBackend::new(), &config);
    bootstrap::initialize_app_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    let res = runtime::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {:?}", err);
    }
    tracing::info!("gira-tui exited");
    res
}

/// Log to a file under the config dir so the alternate screen stays
/// clean. Filter via GIRA_LOG (tracing env-filter syntax).
fn init_tracing() -> Result<()> {
    let path = GiraConfig::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_env("GIRA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
