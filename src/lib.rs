//! # Media compliance checker
//!
//! HTTP backend that accepts an uploaded file, a URL or a block of text on
//! `POST /run`, classifies it (video, document, generic file, YouTube link,
//! web URL or text) and answers with a [`ComplianceReport`].
//!
//! Report production sits behind the [`ComplianceChecker`] trait. The bundled
//! [`MockComplianceChecker`] returns fixed values per category.

pub mod compliance;
pub mod constants;
pub mod error;
pub mod logging;
pub mod server;

pub use compliance::{
    Category, CheckInput, ComplianceChecker, ComplianceReport, Issue, Metadata,
    MockComplianceChecker, ReportStatus, Severity, Summary,
};
pub use error::{CheckerError, CheckerResult};
pub use server::{load_server_config, ComplianceHttpServer, ServerConfig};
