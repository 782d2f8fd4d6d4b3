//! tests/global_errors/408.rs
//! Ensures that requests taking too long result in a 408 timeout.

use std::time::Duration;

use axum::{routing::get, Router};
use greeting_service::config::environment::EnvironmentVariables;
use greeting_service::core::server::apply_layers;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::timeout;

use crate::common;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    // A route slower than the one-second timeout, behind the same middleware stack.
    let slow: Router = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "too late"
        }),
    );
    let env: EnvironmentVariables = common::test_env(&[("DEFAULT_TIMEOUT_SECONDS", "1")]);
    let base_url: String = common::spawn_router(apply_layers(slow, &env));

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        reqwest::get(format!("{}/slow", base_url)),
    )
    .await;

    // Ensure the client did not timeout waiting for a response.
    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}
