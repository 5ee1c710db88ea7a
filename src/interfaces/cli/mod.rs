//! CLI interface module
//!
//! This module provides one-shot command handling for shortly.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::config::Config;
use crate::errors::ShortlyError;
use crate::store::LinkStore;

#[derive(Debug)]
pub enum CliError {
    StoreError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StoreError(msg) => format!("Store error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StoreError(msg) => {
                format!("{} {}", "Store error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ShortlyError> for CliError {
    fn from(err: ShortlyError) -> Self {
        match err {
            ShortlyError::Validation(msg) => CliError::ParseError(msg),
            other => CliError::StoreError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &Config) -> Result<(), CliError> {
    let store = LinkStore::open(config);

    match cmd {
        Commands::Add { url } => commands::add(&store, config, &url),

        Commands::List => commands::list(&store, config),

        Commands::Open { address } => commands::open(&store, &address),

        Commands::Copy { id } => commands::copy(&store, config, &id),

        Commands::Qr { id, open, output } => {
            commands::qr(&store, config, &id, open, output.as_deref())
        }

        Commands::Remove { id } => commands::remove(&store, &id),

        Commands::Clear { yes } => commands::clear(&store, yes),

        Commands::Theme { value } => commands::theme(&store, value.as_deref()),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}
