//! Logging system initialization

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initialize the tracing subscriber.
///
/// Logs go to stderr by default; when a log file is configured the
/// writes go through a non-blocking worker instead. Interactive mode
/// always passes a file because the terminal is occupied.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If the configured log file cannot be opened
/// * If a global subscriber is already installed
pub fn init_logging(config: &Config) -> WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).expect("Failed to create log directory");
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .expect("Failed to open log file");
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::new(config.log_filter.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.log_file.is_none())
        .init();

    guard
}
