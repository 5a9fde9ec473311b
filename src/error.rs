use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Message returned to callers for any server-side failure.
///
/// The underlying error is logged, never echoed back.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Unified error type for the compliance checker.
///
/// Variants fall into two groups: client errors (bad or missing input, which
/// map to 4xx with their message) and internal errors (which map to 500 with
/// an opaque message).
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The request carried no usable file, URL or text
    #[error("{0}")]
    InvalidInput(String),

    /// The multipart body could not be parsed
    #[error("Malformed multipart payload: {0}")]
    Multipart(String),

    /// The request body stream failed
    #[error("Payload error: {0}")]
    Payload(String),

    /// The request body exceeded the configured limit
    #[error("Payload exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    /// Any other failure while producing a report
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CheckerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type used across the crate
pub type CheckerResult<T> = Result<T, CheckerError>;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ResponseError for CheckerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Multipart(_) | Self::Payload(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let detail = if status.is_server_error() {
            log::error!("Request failed: {}", self);
            INTERNAL_ERROR_DETAIL.to_string()
        } else {
            log::warn!("Rejected request: {}", self);
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorDetail { detail })
    }
}
