// Start of file: /src/utils/request_logger.rs

use std::convert::Infallible;
use std::time::Instant;
use axum::{
    body::Body,
    http::{Method, Request, Response},
    middleware::Next,
};
use tracing::info;

/// Logs method, path, status and elapsed time for every request
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request handled"
    );

    Ok(response)
}

// End of file: /src/utils/request_logger.rs
