use clap::Parser;

use shortly::cli::{Cli, Commands};
use shortly::config::Config;
use shortly::interfaces::cli::run_cli_command;
use shortly::system::logging::init_logging;

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load();

    // The interactive session owns the terminal, so its logs go to a file
    // unless the user already picked one.
    #[cfg(feature = "tui")]
    if matches!(cli.command, None | Some(Commands::Tui)) && config.log_file.is_none() {
        config.log_file = Some(config.data_dir.join("shortly.log"));
    }

    let _guard = init_logging(&config);

    match cli.command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => {
            if let Err(e) = shortly::interfaces::tui::run_tui(&config) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }

        #[cfg(not(feature = "tui"))]
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
        }

        Some(cmd) => {
            if let Err(e) = run_cli_command(cmd, &config) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
    }
}
