//! Compliance report model, input classification and report generation.

pub mod checker;
pub mod generator;
pub mod input;
pub mod types;

pub use checker::{ComplianceChecker, MockComplianceChecker};
pub use generator::{format_timestamp, generate_mock_report, MockProfile};
pub use input::{Category, CheckInput};
pub use types::{ComplianceReport, Issue, Metadata, ReportStatus, Severity, Summary};
