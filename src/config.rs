//! Runtime configuration
//!
//! Built from the command-line flags and validated before anything runs.

use crate::engine::SecretGenerator;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

/// Validated settings shared by every command
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fixed seed for reproducible secrets
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: Level,
    /// Write logs here instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            file: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level '{0}' (expected error, warn, info, debug, or trace)")]
    InvalidLevel(String),
}

impl Config {
    /// Validate raw flag values
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidLevel` if `level` is not a tracing level.
    pub fn new(seed: Option<u64>, level: &str, file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let level = level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLevel(level.to_string()))?;

        Ok(Self {
            seed,
            logging: LoggingConfig { level, file },
        })
    }

    /// Secret generator honoring the configured seed
    #[must_use]
    pub fn secret_generator(&self) -> SecretGenerator {
        self.seed
            .map_or_else(SecretGenerator::new, SecretGenerator::seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        let config = Config::new(None, "debug", None).unwrap();
        assert_eq!(config.logging.level, Level::DEBUG);

        let config = Config::new(Some(3), "WARN", Some(PathBuf::from("game.log"))).unwrap();
        assert_eq!(config.logging.level, Level::WARN);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn rejects_unknown_level() {
        assert_eq!(
            Config::new(None, "loud", None),
            Err(ConfigError::InvalidLevel("loud".to_string()))
        );
    }

    #[test]
    fn seeded_config_gives_reproducible_secrets() {
        let config = Config::new(Some(99), "warn", None).unwrap();
        assert_eq!(
            config.secret_generator().generate(),
            config.secret_generator().generate()
        );
    }
}
