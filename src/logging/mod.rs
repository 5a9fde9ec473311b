//! # Logging
//!
//! Installs an `env_logger` backend behind the `log` facade. Lines take the
//! shape `<timestamp> - <LEVEL> - <message>`. `RUST_LOG`, when set, takes
//! precedence over the configured level.

pub mod config;

pub use config::LogConfig;

use env_logger::{Builder, Env};
use std::io::Write;

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
}

/// Build a logger for the given configuration without installing it.
pub fn builder(config: &LogConfig) -> Builder {
    let default_filter = config.level_filter().to_string().to_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if config.include_timestamp {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{} - {}", record.level(), record.args()));
    }

    builder
}

/// Install the global logger.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    builder(config)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_already_initialized() {
        let config = LogConfig::default();
        // Another test may have installed the logger first; either way the
        // second call must fail without panicking.
        let _ = init(&config);
        assert!(matches!(init(&config), Err(LoggingError::AlreadyInitialized)));
    }
}
