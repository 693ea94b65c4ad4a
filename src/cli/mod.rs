// CLI module for running the server and offline maintenance

pub mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Binstash CLI
#[derive(Parser, Debug)]
#[command(name = "binstash")]
#[command(about = "Storage bin inventory backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Apply migrations and serve the HTTP API (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Write all bins as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// The subcommand to run, `serve` when none was given
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
