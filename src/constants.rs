//! Service-wide constants.

/// Human readable service name returned by `GET /`.
pub const SERVICE_NAME: &str = "Media Compliance Checker API";

/// Service version reported by `GET /`.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Environment variable naming the server configuration file.
pub const CONFIG_ENV_VAR: &str = "CHECKER_CONFIG";

/// Configuration file used when neither a path nor the environment variable is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/server_config.json";

/// Browser origins allowed by default (the dev servers of the web frontend).
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// 100 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// 1 MiB
pub const DEFAULT_MAX_JSON_BYTES: usize = 1024 * 1024;

/// MIME types classified as documents.
pub const DOCUMENT_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Hosts that mark a URL as a YouTube link.
pub const YOUTUBE_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Filename used for an uploaded part that carries no filename.
pub const UNNAMED_UPLOAD: &str = "upload";

// Mock report profile
pub const FILE_SCORE: u8 = 95;
pub const URL_SCORE: u8 = 92;
pub const TEXT_SCORE: u8 = 88;
pub const VIDEO_DURATION_SEC: u64 = 120;
pub const YOUTUBE_DURATION_SEC: u64 = 180;
pub const YOUTUBE_FILE_NAME: &str = "YouTube Video";
pub const URL_FILE_NAME: &str = "URL Check";
pub const TEXT_FILE_NAME: &str = "Text Check";
