use serde::{Deserialize, Serialize};

/// Overall outcome of a compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pass,
    PartialFail,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub status: ReportStatus,
    pub issues_count: usize,
    pub recommendations_count: usize,
    /// 0 to 100
    pub score: u8,
}

/// A single finding within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Position in the media the issue refers to, e.g. `"00:01:23"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub file_name: String,
    pub file_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u64>,
    pub checked_at: String,
}

/// The response body of every successful check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub summary: Summary,
    pub issues: Vec<Issue>,
    pub metadata: Metadata,
}

impl ComplianceReport {
    /// Build a report; `summary.issues_count` is always derived from `issues`.
    pub fn new(
        status: ReportStatus,
        recommendations_count: usize,
        score: u8,
        issues: Vec<Issue>,
        metadata: Metadata,
    ) -> Self {
        Self {
            summary: Summary {
                status,
                issues_count: issues.len(),
                recommendations_count,
                score: score.min(100),
            },
            issues,
            metadata,
        }
    }
}
