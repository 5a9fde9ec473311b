//! Compliance check endpoints.
//!
//! `/run` dispatches on whatever the body carries; `/run/file` and `/run/url`
//! accept a single channel. All three share classification, the checker and
//! the response shape.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use serde::Deserialize;
use uuid::Uuid;

use super::http_server::AppState;
use super::upload::{is_multipart, parse_json_body, read_body, read_multipart, read_run_request};
use crate::compliance::CheckInput;
use crate::error::{CheckerError, CheckerResult};

pub const NO_INPUT_DETAIL: &str = "No file, URL, or text provided";
pub const NO_FILE_DETAIL: &str = "No file provided";
pub const NO_URL_DETAIL: &str = "No URL provided";

#[derive(Debug, Deserialize)]
struct UrlQuery {
    url: Option<String>,
}

/// `POST /run`: multipart upload or JSON `{url?, text?}`.
pub async fn run_check(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> CheckerResult<HttpResponse> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] New /run request, content-type: {}",
        request_id,
        content_type(&req)
    );

    let input = read_run_request(&req, payload, &state.limits)
        .await?
        .into_input()
        .ok_or_else(|| {
            warn!("[{}] No valid input provided", request_id);
            CheckerError::invalid_input(NO_INPUT_DETAIL)
        })?;

    respond(&state, request_id, input).await
}

/// `POST /run/file`: multipart upload with a `file` part.
pub async fn run_file_check(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> CheckerResult<HttpResponse> {
    let request_id = Uuid::new_v4();
    info!("[{}] New /run/file request", request_id);

    if !is_multipart(&req) {
        return Err(CheckerError::invalid_input(NO_FILE_DETAIL));
    }
    let input = read_multipart(&req, payload, state.limits.max_upload_bytes)
        .await?
        .file
        .ok_or_else(|| CheckerError::invalid_input(NO_FILE_DETAIL))?;

    respond(&state, request_id, input).await
}

/// `POST /run/url`: `?url=` query parameter, or JSON `{url}`.
pub async fn run_url_check(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> CheckerResult<HttpResponse> {
    let request_id = Uuid::new_v4();
    info!("[{}] New /run/url request", request_id);

    let from_query = web::Query::<UrlQuery>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.into_inner().url)
        .filter(|u| !u.is_empty());

    let url = match from_query {
        Some(url) => url,
        None => {
            let body = read_body(payload, state.limits.max_json_bytes).await?;
            parse_json_body(&body)
                .url
                .filter(|u| !u.is_empty())
                .ok_or_else(|| CheckerError::invalid_input(NO_URL_DETAIL))?
        }
    };

    respond(&state, request_id, CheckInput::Url(url)).await
}

async fn respond(
    state: &AppState,
    request_id: Uuid,
    input: CheckInput,
) -> CheckerResult<HttpResponse> {
    info!(
        "[{}] Checking {} as {}",
        request_id,
        input.describe(),
        input.category()
    );

    let report = state.checker.check(&input).await.map_err(|e| {
        log::error!("[{}] Compliance check failed: {}", request_id, e);
        e
    })?;

    info!(
        "[{}] Returning report: status {:?}, score {}",
        request_id, report.summary.status, report.summary.score
    );
    Ok(HttpResponse::Ok().json(report))
}

fn content_type(req: &HttpRequest) -> &str {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none")
}
