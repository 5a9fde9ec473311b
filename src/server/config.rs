use crate::constants::{
    CONFIG_ENV_VAR, DEFAULT_ALLOWED_ORIGINS, DEFAULT_BIND_ADDRESS, DEFAULT_CONFIG_PATH,
    DEFAULT_MAX_JSON_BYTES, DEFAULT_MAX_UPLOAD_BYTES,
};
use crate::logging::LogConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the compliance checker HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub limits: UploadLimits,
    #[serde(default)]
    pub logging: LogConfig,
}

/// Cross-origin settings for the browser frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Preflight cache lifetime in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

/// Body size bounds; uploads are buffered fully in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLimits {
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default = "default_max_json_bytes")]
    pub max_json_bytes: usize,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

fn default_max_age() -> usize {
    3600
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_max_json_bytes() -> usize {
    DEFAULT_MAX_JSON_BYTES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors: CorsConfig::default(),
            limits: UploadLimits::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            max_age: default_max_age(),
        }
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_json_bytes: default_max_json_bytes(),
        }
    }
}

impl CorsConfig {
    /// Every origin must be `"*"` or an absolute URI with scheme and host.
    pub fn validate(&self) -> Result<(), String> {
        for origin in &self.allowed_origins {
            if origin == "*" {
                continue;
            }
            let valid = origin
                .parse::<actix_web::http::Uri>()
                .map(|uri| uri.scheme().is_some() && uri.host().is_some())
                .unwrap_or(false);
            if !valid {
                return Err(format!("Invalid CORS origin '{}'", origin));
            }
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Replace the port of `bind_address`, keeping its host.
    pub fn with_port(mut self, port: u16) -> Self {
        let host = match self.bind_address.rsplit_once(':') {
            Some((host, _)) => host.to_string(),
            None => self.bind_address.clone(),
        };
        self.bind_address = format!("{}:{}", host, port);
        self
    }
}

/// Load the server configuration.
///
/// The file is taken from `path`, else from the `CHECKER_CONFIG` environment
/// variable, else `config/server_config.json`. A missing file yields the
/// defaults; a file that does not parse, or that lists an invalid CORS
/// origin, is an error. `port`, when given,
/// overrides the port of the bind address.
pub fn load_server_config(path: Option<&str>, port: Option<u16>) -> Result<ServerConfig, std::io::Error> {
    use std::fs;

    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match fs::read_to_string(&config_path) {
        Ok(config_str) => serde_json::from_str::<ServerConfig>(&config_str).map_err(|e| {
            log::error!("Failed to parse server configuration {}: {}", config_path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No configuration at {}, using defaults", config_path);
            ServerConfig::default()
        }
        Err(e) => return Err(e),
    };

    config.cors.validate().map_err(|e| {
        log::error!("Invalid server configuration {}: {}", config_path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    Ok(match port {
        Some(p) => config.with_port(p),
        None => config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_frontend_setup() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.cors.allowed_origins.len(), 4);
        assert!(config
            .cors
            .allowed_origins
            .contains(&"http://localhost:5173".to_string()));
        assert_eq!(config.limits.max_upload_bytes, 100 * 1024 * 1024);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");
        let config = load_server_config(path.to_str(), None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn partial_file_is_merged_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"bind_address": "127.0.0.1:9100", "limits": {{"max_upload_bytes": 2048}}}}"#
        )
        .unwrap();

        let config = load_server_config(file.path().to_str(), None).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9100");
        assert_eq!(config.limits.max_upload_bytes, 2048);
        assert_eq!(config.limits.max_json_bytes, DEFAULT_MAX_JSON_BYTES);
        assert_eq!(config.cors, CorsConfig::default());
    }

    #[test]
    fn port_override_keeps_host() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"bind_address": "127.0.0.1:9100"}}"#).unwrap();

        let config = load_server_config(file.path().to_str(), Some(8123)).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8123");
    }

    #[test]
    fn invalid_cors_origin_is_rejected_at_load() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"cors": {{"allowed_origins": ["http://localhost:3000", "not an origin"]}}}}"#
        )
        .unwrap();

        let err = load_server_config(file.path().to_str(), None).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("not an origin"));
    }

    #[test]
    fn wildcard_and_default_origins_are_valid() {
        assert!(CorsConfig::default().validate().is_ok());

        let config = CorsConfig {
            allowed_origins: vec!["*".into(), "https://app.example.com".into()],
            ..CorsConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = CorsConfig {
            allowed_origins: vec!["localhost:3000".into()],
            ..CorsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_server_config(file.path().to_str(), None).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
