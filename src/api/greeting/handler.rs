// Handler for the greeting endpoint

use axum::{extract::Query, http::StatusCode, Json};
use tracing::{debug, instrument};

use super::model::{Greeting, GreetingParams};

/// Greets `name`, or "World" when the parameter is omitted
#[instrument(skip_all)]
pub async fn greeting_handler(
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<Greeting>) {
    let params: GreetingParams = GreetingParams::from_pairs(pairs);
    debug!(name = %params.name, "Greeting requested");

    (StatusCode::OK, Json(Greeting::new(&params.name)))
}
