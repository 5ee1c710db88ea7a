//! Remove link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::LinkStore;

/// Delete one saved link. Removing an unknown identifier is a no-op.
pub fn remove(store: &LinkStore, id: &str) -> Result<(), CliError> {
    if store.remove(id)? {
        println!("{} Deleted link: {}", "✓".bold().green(), id.cyan());
    } else {
        println!("{} Nothing to delete: {}", "ℹ".bold().blue(), id.cyan());
    }

    Ok(())
}
