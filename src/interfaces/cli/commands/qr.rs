//! QR code command

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::interfaces::cli::CliError;
use crate::service;
use crate::store::LinkStore;

/// Show, download or open the QR code image for a short link.
pub fn qr(
    store: &LinkStore,
    config: &Config,
    id: &str,
    open: bool,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let table = store.load();
    if !table.contains(id) {
        return Err(CliError::CommandError(format!(
            "Short link does not exist: {}",
            id
        )));
    }

    let short_url = service::short_url_for(config, id);

    if let Some(path) = output {
        let image = service::fetch_qr(config, &short_url)?;
        fs::write(path, image).map_err(|e| {
            CliError::CommandError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        println!(
            "{} Saved QR image: {}",
            "✓".bold().green(),
            path.display().to_string().cyan()
        );
        return Ok(());
    }

    let qr_url = service::qr_url_for(config, &short_url);

    if open {
        webbrowser::open(&qr_url)
            .map_err(|e| CliError::CommandError(format!("Failed to open browser: {}", e)))?;
        println!("{} Opening QR image in browser", "✓".bold().green());
        return Ok(());
    }

    println!("{} QR image: {}", "ℹ".bold().blue(), qr_url.blue().underline());

    Ok(())
}
