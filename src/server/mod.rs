//! HTTP surface of the compliance checker.

pub mod config;
pub mod cors;
pub mod http_server;
pub mod run_routes;
pub mod system_routes;
pub mod upload;

pub use config::{load_server_config, CorsConfig, ServerConfig, UploadLimits};
pub use cors::build_cors;
pub use http_server::{configure_routes, AppState, ComplianceHttpServer};
