//! Mock report generation.
//!
//! Reports carry fixed values per [`Category`]; no content is inspected.

use super::input::{Category, CheckInput};
use super::types::{ComplianceReport, Metadata, ReportStatus};
use crate::constants::{
    FILE_SCORE, TEXT_FILE_NAME, TEXT_SCORE, URL_FILE_NAME, URL_SCORE, VIDEO_DURATION_SEC,
    YOUTUBE_DURATION_SEC, YOUTUBE_FILE_NAME,
};
use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed values reported for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockProfile {
    pub score: u8,
    pub duration_sec: Option<u64>,
}

impl Category {
    pub fn mock_profile(&self) -> MockProfile {
        match self {
            Category::Video => MockProfile {
                score: FILE_SCORE,
                duration_sec: Some(VIDEO_DURATION_SEC),
            },
            Category::Document | Category::File => MockProfile {
                score: FILE_SCORE,
                duration_sec: None,
            },
            Category::YouTube => MockProfile {
                score: URL_SCORE,
                duration_sec: Some(YOUTUBE_DURATION_SEC),
            },
            Category::Url => MockProfile {
                score: URL_SCORE,
                duration_sec: None,
            },
            Category::Text => MockProfile {
                score: TEXT_SCORE,
                duration_sec: None,
            },
        }
    }
}

/// Produce the mock report for `input`, stamped with `checked_at`.
pub fn generate_mock_report(input: &CheckInput, checked_at: DateTime<Utc>) -> ComplianceReport {
    let category = input.category();
    let profile = category.mock_profile();

    let file_name = match (input, category) {
        (CheckInput::File { file_name, .. }, _) => file_name.clone(),
        (_, Category::YouTube) => YOUTUBE_FILE_NAME.to_string(),
        (CheckInput::Url(_), _) => URL_FILE_NAME.to_string(),
        (CheckInput::Text(_), _) => TEXT_FILE_NAME.to_string(),
    };

    let metadata = Metadata {
        file_name,
        file_size: input.size(),
        duration_sec: profile.duration_sec,
        checked_at: format_timestamp(checked_at),
    };

    ComplianceReport::new(ReportStatus::Pass, 0, profile.score, Vec::new(), metadata)
}

/// ISO-8601 / RFC 3339 with microseconds, UTC.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
