//! List links command

use colored::Colorize;

use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::service;
use crate::store::LinkStore;

/// Print every saved link, newest first.
pub fn list(store: &LinkStore, config: &Config) -> Result<(), CliError> {
    let table = store.load();

    if table.is_empty() {
        println!("{} No saved links yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Saved links:".bold().green());
    for record in table.iter_newest_first() {
        println!(
            "  {} -> {}",
            service::short_url_for(config, &record.id).cyan(),
            record.target.blue().underline()
        );
    }

    println!();
    println!(
        "{} Total {} links",
        "ℹ".bold().blue(),
        table.len().to_string().green()
    );

    Ok(())
}
