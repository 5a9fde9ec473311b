use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::compliance::format_timestamp;
use crate::constants::{SERVICE_NAME, SERVICE_VERSION};

/// Service banner with the available endpoints
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": SERVICE_NAME,
        "status": "running",
        "version": SERVICE_VERSION,
        "endpoints": {
            "upload": "POST /run",
            "upload_file": "POST /run/file",
            "upload_url": "POST /run/url",
            "health": "GET /health"
        }
    }))
}

/// Liveness check
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": format_timestamp(chrono::Utc::now())
    }))
}
