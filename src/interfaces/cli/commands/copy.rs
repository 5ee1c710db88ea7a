//! Copy link command

use colored::Colorize;

use crate::clipboard;
use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::service;
use crate::store::LinkStore;

/// Copy the short URL for an identifier to the clipboard.
pub fn copy(store: &LinkStore, config: &Config, id: &str) -> Result<(), CliError> {
    let table = store.load();
    if !table.contains(id) {
        return Err(CliError::CommandError(format!(
            "Short link does not exist: {}",
            id
        )));
    }

    let short_url = service::short_url_for(config, id);
    clipboard::copy(&short_url)?;

    println!(
        "{} Copied to clipboard: {}",
        "✓".bold().green(),
        short_url.cyan()
    );

    Ok(())
}
