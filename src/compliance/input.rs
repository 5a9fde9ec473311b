//! Classification of incoming check requests.

use crate::constants::{DOCUMENT_MIME_TYPES, YOUTUBE_MARKERS};

/// The content a caller asked to have checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInput {
    File {
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
    Url(String),
    Text(String),
}

/// Category of a request, driving which report values are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Video,
    Document,
    File,
    YouTube,
    Url,
    Text,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Document => "document",
            Self::File => "file",
            Self::YouTube => "youtube",
            Self::Url => "url",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CheckInput {
    /// Pick the input from the available channels. A file wins over a URL,
    /// a URL wins over text, and empty strings count as absent.
    pub fn select(file: Option<CheckInput>, url: Option<String>, text: Option<String>) -> Option<Self> {
        if let Some(file) = file {
            return Some(file);
        }
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            return Some(Self::Url(url));
        }
        text.filter(|t| !t.is_empty()).map(Self::Text)
    }

    pub fn category(&self) -> Category {
        match self {
            Self::File { content_type, .. } => classify_mime(content_type.as_deref()),
            Self::Url(url) => {
                if is_youtube_url(url) {
                    Category::YouTube
                } else {
                    Category::Url
                }
            }
            Self::Text(_) => Category::Text,
        }
    }

    /// Bytes for files, 0 for URLs, character count for text.
    pub fn size(&self) -> u64 {
        match self {
            Self::File { bytes, .. } => bytes.len() as u64,
            Self::Url(_) => 0,
            Self::Text(text) => text.chars().count() as u64,
        }
    }

    /// Short description for log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::File {
                file_name,
                content_type,
                bytes,
            } => format!(
                "file '{}' ({} bytes, type {})",
                file_name,
                bytes.len(),
                content_type.as_deref().unwrap_or("unknown")
            ),
            Self::Url(url) => format!("url '{}'", url),
            Self::Text(text) => format!("text ({} characters)", text.chars().count()),
        }
    }
}

fn classify_mime(content_type: Option<&str>) -> Category {
    let Some(mime) = content_type else {
        return Category::File;
    };
    // Drop parameters such as "; charset=binary"
    let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();

    if essence.starts_with("video/") {
        Category::Video
    } else if DOCUMENT_MIME_TYPES.contains(&essence.as_str()) {
        Category::Document
    } else {
        Category::File
    }
}

pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_MARKERS.iter().any(|marker| url.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content_type: Option<&str>) -> CheckInput {
        CheckInput::File {
            file_name: "upload.bin".into(),
            content_type: content_type.map(str::to_string),
            bytes: vec![0; 16],
        }
    }

    #[test]
    fn files_are_classified_by_mime_type() {
        assert_eq!(file(Some("video/mp4")).category(), Category::Video);
        assert_eq!(file(Some("VIDEO/QuickTime")).category(), Category::Video);
        assert_eq!(file(Some("application/pdf")).category(), Category::Document);
        assert_eq!(file(Some("application/msword")).category(), Category::Document);
        assert_eq!(
            file(Some(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ))
            .category(),
            Category::Document
        );
        assert_eq!(file(Some("image/png")).category(), Category::File);
        assert_eq!(file(None).category(), Category::File);
    }

    #[test]
    fn mime_parameters_are_ignored() {
        assert_eq!(
            file(Some("application/pdf; charset=binary")).category(),
            Category::Document
        );
    }

    #[test]
    fn youtube_urls_are_detected_by_substring() {
        assert_eq!(
            CheckInput::Url("https://www.youtube.com/watch?v=abc".into()).category(),
            Category::YouTube
        );
        assert_eq!(
            CheckInput::Url("https://youtu.be/abc".into()).category(),
            Category::YouTube
        );
        assert_eq!(
            CheckInput::Url("https://example.com/article".into()).category(),
            Category::Url
        );
    }

    #[test]
    fn select_prefers_file_then_url_then_text() {
        let picked = CheckInput::select(
            Some(file(Some("video/mp4"))),
            Some("https://example.com".into()),
            Some("hello".into()),
        );
        assert!(matches!(picked, Some(CheckInput::File { .. })));

        let picked = CheckInput::select(None, Some("https://example.com".into()), Some("hi".into()));
        assert_eq!(picked, Some(CheckInput::Url("https://example.com".into())));

        let picked = CheckInput::select(None, Some(String::new()), Some("hi".into()));
        assert_eq!(picked, Some(CheckInput::Text("hi".into())));

        assert_eq!(CheckInput::select(None, Some(String::new()), Some(String::new())), None);
        assert_eq!(CheckInput::select(None, None, None), None);
    }

    #[test]
    fn text_size_counts_characters() {
        assert_eq!(CheckInput::Text("héllo".into()).size(), 5);
        assert_eq!(CheckInput::Url("https://example.com".into()).size(), 0);
        assert_eq!(file(None).size(), 16);
    }
}
