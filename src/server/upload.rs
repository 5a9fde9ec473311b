//! Reading `/run` request bodies into a [`RunRequest`].
//!
//! Bodies are buffered fully in memory, bounded by [`UploadLimits`].

use super::config::UploadLimits;
use crate::compliance::CheckInput;
use crate::constants::UNNAMED_UPLOAD;
use crate::error::{CheckerError, CheckerResult};
use actix_multipart::{Field, Multipart};
use actix_web::http::header;
use actix_web::web::{self, BytesMut};
use actix_web::HttpRequest;
use futures_util::StreamExt;
use serde_json::Value;

/// The input channels found in a request body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub file: Option<CheckInput>,
    pub url: Option<String>,
    pub text: Option<String>,
}

impl RunRequest {
    /// Collapse the channels into a single input; see [`CheckInput::select`].
    pub fn into_input(self) -> Option<CheckInput> {
        CheckInput::select(self.file, self.url, self.text)
    }
}

pub fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Read a request body, as multipart when the content type says so and as
/// JSON otherwise.
pub async fn read_run_request(
    req: &HttpRequest,
    payload: web::Payload,
    limits: &UploadLimits,
) -> CheckerResult<RunRequest> {
    if is_multipart(req) {
        read_multipart(req, payload, limits.max_upload_bytes).await
    } else {
        let body = read_body(payload, limits.max_json_bytes).await?;
        Ok(parse_json_body(&body))
    }
}

/// Read a `multipart/form-data` body. The `file` part becomes the upload,
/// text parts `url` and `text` are kept, everything else is drained.
pub async fn read_multipart(
    req: &HttpRequest,
    payload: web::Payload,
    max_bytes: usize,
) -> CheckerResult<RunRequest> {
    let mut multipart = Multipart::new(req.headers(), payload);
    let mut request = RunRequest::default();
    let mut total = 0usize;

    while let Some(field) = multipart.next().await {
        let mut field = field.map_err(|e| CheckerError::Multipart(e.to_string()))?;
        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_string();
        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|m| m.to_string());

        let bytes = read_field(&mut field, &mut total, max_bytes).await?;

        match name.as_str() {
            "file" if request.file.is_none() => {
                // Browsers send an empty part for an untouched file input
                if bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
                    continue;
                }
                request.file = Some(CheckInput::File {
                    file_name: file_name
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| UNNAMED_UPLOAD.to_string()),
                    content_type,
                    bytes,
                });
            }
            "url" => request.url = Some(field_text("url", bytes)?),
            "text" => request.text = Some(field_text("text", bytes)?),
            _ => log::debug!("Ignoring multipart field '{}'", name),
        }
    }

    Ok(request)
}

async fn read_field(field: &mut Field, total: &mut usize, max_bytes: usize) -> CheckerResult<Vec<u8>> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| CheckerError::Multipart(e.to_string()))?;
        *total += chunk.len();
        if *total > max_bytes {
            return Err(CheckerError::PayloadTooLarge { limit: max_bytes });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn field_text(name: &str, bytes: Vec<u8>) -> CheckerResult<String> {
    String::from_utf8(bytes)
        .map_err(|_| CheckerError::Multipart(format!("field '{}' is not valid UTF-8", name)))
}

/// Buffer a raw body, failing once it grows past `max_bytes`.
pub async fn read_body(mut payload: web::Payload, max_bytes: usize) -> CheckerResult<BytesMut> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| CheckerError::Payload(e.to_string()))?;
        if body.len() + chunk.len() > max_bytes {
            return Err(CheckerError::PayloadTooLarge { limit: max_bytes });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Extract `url` and `text` from a JSON object body.
///
/// Anything that is not a JSON object, and any non-string field, is treated
/// as absent so the caller ends up with a 400 rather than a parse error.
pub fn parse_json_body(body: &[u8]) -> RunRequest {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            if !body.is_empty() {
                log::info!("Request body is not JSON: {}", e);
            }
            Value::Null
        }
    };

    let string_field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    RunRequest {
        file: None,
        url: string_field("url"),
        text: string_field("text"),
    }
}
