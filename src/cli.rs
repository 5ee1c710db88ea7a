//! Command-line interface definitions using clap
//!
//! This module defines the one-shot command surface for shortly using
//! clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shortly - a personal short link stash
#[derive(Parser)]
#[command(name = "shortly")]
#[command(version)]
#[command(about = "A personal short link stash", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL and copy the short link
    ///
    /// Input without a recognizable protocol gets https:// prepended,
    /// the way a browser address bar would treat it.
    Add {
        /// Target URL to shorten
        url: String,
    },

    /// List saved links, newest first
    List,

    /// Resolve an address and open its target in the browser
    ///
    /// Accepts a full address carrying a #/<id> fragment, or a bare
    /// six-character identifier as shorthand for that fragment.
    Open {
        /// Address with fragment, or bare identifier
        address: String,
    },

    /// Copy the short URL for a saved link
    Copy {
        /// Link identifier
        id: String,
    },

    /// Show, download or open the QR code for a short link
    Qr {
        /// Link identifier
        id: String,

        /// Open the QR image in the browser
        #[arg(long)]
        open: bool,

        /// Download the QR image to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Delete a saved link
    Remove {
        /// Link identifier
        id: String,
    },

    /// Delete every saved link
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show or set the color theme
    Theme {
        /// New theme, "light" or "dark"
        value: Option<String>,
    },
}
