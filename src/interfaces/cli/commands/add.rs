//! Add link command

use colored::Colorize;
use tracing::debug;

use crate::clipboard;
use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::service;
use crate::store::LinkStore;

/// Shorten a URL, save it and copy the short link to the clipboard.
pub fn add(store: &LinkStore, config: &Config, input: &str) -> Result<(), CliError> {
    let created = service::create(store, config, input)?;

    if created.scheme_corrected {
        println!(
            "{} No protocol found — prepending https://",
            "⚠".bold().yellow()
        );
    }

    println!(
        "{} Short URL created: {} -> {}",
        "✓".bold().green(),
        created.short_url.cyan(),
        created.target.blue().underline()
    );

    // The page copies the fresh short link without being asked; a dead
    // clipboard only costs the convenience, not the command.
    match clipboard::copy(&created.short_url) {
        Ok(()) => println!("{} Copied to clipboard", "ℹ".bold().blue()),
        Err(e) => debug!("Clipboard unavailable: {}", e),
    }

    Ok(())
}
