// Unified JSON envelope for error responses.
// Successful responses pass through untouched; 4xx/5xx bodies are rewritten into ErrorFormat.

use axum::{
    body::{Body, Bytes},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        response::Parts,
        HeaderValue, Request, Response, StatusCode,
    },
    middleware::Next,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};
use std::convert::Infallible;
use tracing::{error, info};

/// Standard JSON body for every error response
#[derive(Debug, Serialize)]
pub struct ErrorFormat {
    pub status: String,        // HTTP status text (e.g. "NOT_FOUND")
    pub code: u16,             // HTTP status code
    pub messages: Vec<String>, // Detail produced by the framework, if any
    pub date: String,          // ISO timestamp
}

impl ErrorFormat {
    pub fn new(status: StatusCode, messages: Vec<String>) -> Self {
        Self {
            status: status_label(status),
            code: status.as_u16(),
            messages,
            date: Utc::now().to_rfc3339(),
        }
    }
}

/// "Not Found" -> "NOT_FOUND"
fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Plain-text bodies become a single message; empty bodies none
fn body_to_messages(raw: &[u8]) -> Vec<String> {
    let text: String = String::from_utf8_lossy(raw).trim().to_owned();

    if text.is_empty() {
        Vec::new()
    } else {
        vec![text]
    }
}

/// Convert any `Serialize` type into a two-space-indented JSON string.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut writer: Vec<u8> = Vec::new();
    let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"  ");
    let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
        Serializer::with_formatter(&mut writer, formatter);

    value.serialize(&mut ser)?;

    Ok(String::from_utf8(writer)?)
}

fn log_formatted_response(wrapped: &ErrorFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => info!("\nError response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

fn build_error_response(mut parts: Parts, wrapped: &ErrorFormat) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(wrapped).unwrap_or_else(|err| {
        error!("Failed to serialize error envelope: {err}");
        b"{}".to_vec()
    });

    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(parts, Body::from(json_body))
}

/// Middleware that wraps every error response in the ErrorFormat structure
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let response: Response<Body> = next.run(req).await;
    let status: StatusCode = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(response);
    }

    let (parts, body) = response.into_parts();

    let messages: Vec<String> = match body.collect().await {
        Ok(collected) => {
            let raw: Bytes = collected.to_bytes();
            body_to_messages(&raw)
        }
        Err(err) => {
            error!("Failed to collect error response body: {err}");
            Vec::new()
        }
    };

    let wrapped: ErrorFormat = ErrorFormat::new(status, messages);
    log_formatted_response(&wrapped);

    Ok(build_error_response(parts, &wrapped))
}
