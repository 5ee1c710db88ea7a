//! Theme command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::{LinkStore, Theme};

/// Show the current theme, or set a new one.
pub fn theme(store: &LinkStore, value: Option<&str>) -> Result<(), CliError> {
    let Some(value) = value else {
        println!("{} Theme: {}", "ℹ".bold().blue(), store.theme().as_str().cyan());
        return Ok(());
    };

    // `Theme::parse` reads anything unknown as light, which is right for
    // stored values but too forgiving for an explicit command.
    let theme = match value {
        "light" => Theme::Light,
        "dark" => Theme::Dark,
        other => {
            return Err(CliError::ParseError(format!(
                "Unknown theme \"{}\", expected light or dark",
                other
            )));
        }
    };

    store.set_theme(theme)?;
    println!(
        "{} Theme set to {}",
        "✓".bold().green(),
        theme.as_str().cyan()
    );

    Ok(())
}
