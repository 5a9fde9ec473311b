//! Configuration for the logging system

use serde::{Deserialize, Serialize};

/// Logging configuration, embedded in the server configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level for all modules
    #[serde(default = "default_level")]
    pub level: String,
    /// Include the local timestamp on each line
    #[serde(default = "default_true")]
    pub include_timestamp: bool,
    /// Emit actix access log lines for every request
    #[serde(default = "default_true")]
    pub access_log: bool,
}

fn default_level() -> String {
    "INFO".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            include_timestamp: true,
            access_log: true,
        }
    }
}

impl LogConfig {
    /// Resolve the configured level, falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_uppercase().as_str() {
            "TRACE" => log::LevelFilter::Trace,
            "DEBUG" => log::LevelFilter::Debug,
            "INFO" => log::LevelFilter::Info,
            "WARN" | "WARNING" => log::LevelFilter::Warn,
            "ERROR" => log::LevelFilter::Error,
            "OFF" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        }
    }
}
