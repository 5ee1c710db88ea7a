//! Open link command

use std::borrow::Cow;

use colored::Colorize;

use crate::alloc::ID_LENGTH;
use crate::interfaces::cli::CliError;
use crate::resolve::{self, Resolution};
use crate::store::LinkStore;

/// Resolve an address and open the target in the default browser.
pub fn open(store: &LinkStore, address: &str) -> Result<(), CliError> {
    let table = store.load();

    // A bare identifier stands in for its fragment form.
    let address = if !address.contains('#') && address.len() == ID_LENGTH {
        Cow::Owned(format!("#/{}", address))
    } else {
        Cow::Borrowed(address)
    };

    match resolve::resolve(&address, &table) {
        Resolution::Found { id, target } => {
            webbrowser::open(&target)
                .map_err(|e| CliError::CommandError(format!("Failed to open browser: {}", e)))?;
            println!(
                "{} Opening {} -> {}",
                "✓".bold().green(),
                id.cyan(),
                target.blue().underline()
            );
            Ok(())
        }
        Resolution::NotFound { id } => Err(CliError::CommandError(format!(
            "Short link not found: {}",
            id
        ))),
        Resolution::NoFragment => {
            println!(
                "{} No short link fragment in address, nothing to open",
                "ℹ".bold().blue()
            );
            Ok(())
        }
        Resolution::Malformed => {
            println!(
                "{} Not a short link fragment, nothing to open",
                "ℹ".bold().blue()
            );
            Ok(())
        }
    }
}
