//! Clear links command

use std::io::{self, Write};

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::LinkStore;

/// Delete every saved link after confirmation.
pub fn clear(store: &LinkStore, yes: bool) -> Result<(), CliError> {
    if !yes {
        print!("Clear ALL saved links? [y/N] ");
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    store.clear()?;
    println!("{} All links cleared", "✓".bold().green());

    Ok(())
}
