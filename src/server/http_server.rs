use super::config::{ServerConfig, UploadLimits};
use super::cors::build_cors;
use super::{run_routes, system_routes};
use crate::compliance::ComplianceChecker;
use crate::error::CheckerResult;

use actix_web::middleware::{Condition, Logger};
use actix_web::{web, App, HttpServer as ActixHttpServer};
use log::info;
use std::sync::Arc;

/// HTTP server for the compliance checker.
///
/// Serves the status endpoints and the `/run` family of check endpoints, with
/// CORS configured for the browser frontend.
pub struct ComplianceHttpServer {
    config: ServerConfig,
    checker: Arc<dyn ComplianceChecker>,
}

/// Shared application state for the HTTP handlers.
pub struct AppState {
    /// Produces the reports
    pub checker: Arc<dyn ComplianceChecker>,
    /// Request body bounds
    pub limits: UploadLimits,
}

impl AppState {
    pub fn new(checker: Arc<dyn ComplianceChecker>, limits: UploadLimits) -> Self {
        Self { checker, limits }
    }
}

/// Register every route. Shared by the server and the HTTP tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(system_routes::root))
        .route("/health", web::get().to(system_routes::health_check))
        .service(
            web::scope("/run")
                .route("", web::post().to(run_routes::run_check))
                .route("/file", web::post().to(run_routes::run_file_check))
                .route("/url", web::post().to(run_routes::run_url_check)),
        );
}

impl ComplianceHttpServer {
    pub fn new(config: ServerConfig, checker: Arc<dyn ComplianceChecker>) -> Self {
        Self { config, checker }
    }

    pub fn bind_address(&self) -> &str {
        &self.config.bind_address
    }

    /// Run the HTTP server until it is shut down.
    ///
    /// # Errors
    ///
    /// Returns `CheckerError::Io` if the address cannot be bound or the
    /// server stops with an error.
    pub async fn run(&self) -> CheckerResult<()> {
        let app_state = web::Data::new(AppState::new(self.checker.clone(), self.config.limits));
        let cors_config = self.config.cors.clone();
        let access_log = self.config.logging.access_log;

        info!(
            "CORS enabled for origins: {}",
            cors_config.allowed_origins.join(", ")
        );

        let server = ActixHttpServer::new(move || {
            App::new()
                .wrap(build_cors(&cors_config))
                .wrap(Condition::new(access_log, Logger::new("%a \"%r\" %s %b %Dms")))
                .app_data(app_state.clone())
                .configure(configure_routes)
        })
        .bind(&self.config.bind_address)
        .map_err(|e| {
            log::error!("Failed to bind HTTP server to {}: {}", self.config.bind_address, e);
            e
        })?
        .run();

        info!("HTTP server running on {}", self.config.bind_address);
        server.await?;
        info!("HTTP server stopped");

        Ok(())
    }
}
