use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gira-tui")]
#[command(about = "Terminal UI for the gira issue tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the tracker UI (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}
