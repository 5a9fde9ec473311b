use super::generator::generate_mock_report;
use super::input::CheckInput;
use super::types::ComplianceReport;
use crate::error::CheckerResult;
use async_trait::async_trait;

/// Produces a compliance report for a piece of content.
///
/// Real media, document and text analysis plugs in here; the HTTP layer only
/// depends on this trait.
#[async_trait]
pub trait ComplianceChecker: Send + Sync {
    async fn check(&self, input: &CheckInput) -> CheckerResult<ComplianceReport>;
}

/// Returns fixed reports per input category, stamped with the current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockComplianceChecker;

impl MockComplianceChecker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ComplianceChecker for MockComplianceChecker {
    async fn check(&self, input: &CheckInput) -> CheckerResult<ComplianceReport> {
        Ok(generate_mock_report(input, chrono::Utc::now()))
    }
}
