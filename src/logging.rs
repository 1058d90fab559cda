//! Tracing subscriber setup

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber
///
/// `RUST_LOG` overrides the configured level. With `owns_terminal` set (the
/// TUI), logs are written only when a log file is configured.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(config: &LoggingConfig, owns_terminal: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    match &config.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file at {}", path.display()))?;
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            // Ignore error if a global subscriber is already set (e.g., in tests)
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        None if owns_terminal => {}
        None => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
    }

    Ok(())
}
