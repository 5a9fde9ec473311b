//! Shared fixtures for the HTTP API tests.

use async_trait::async_trait;
use compliance_checker::compliance::{CheckInput, ComplianceChecker, ComplianceReport};
use compliance_checker::server::{AppState, UploadLimits};
use compliance_checker::{CheckerError, CheckerResult, MockComplianceChecker};
use actix_web::web;
use std::sync::Arc;

pub const BOUNDARY: &str = "----compliance-test-boundary";

/// Application state backed by the mock checker and default limits.
pub fn mock_state() -> web::Data<AppState> {
    state_with(Arc::new(MockComplianceChecker::new()), UploadLimits::default())
}

pub fn state_with(checker: Arc<dyn ComplianceChecker>, limits: UploadLimits) -> web::Data<AppState> {
    web::Data::new(AppState::new(checker, limits))
}

/// A checker whose analysis always fails with a sensitive message.
pub struct FailingChecker;

#[async_trait]
impl ComplianceChecker for FailingChecker {
    async fn check(&self, _input: &CheckInput) -> CheckerResult<ComplianceReport> {
        Err(CheckerError::internal("connection to analysis backend at 10.0.0.7 refused"))
    }
}

/// Builds a `multipart/form-data` body by hand.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
        self
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}
