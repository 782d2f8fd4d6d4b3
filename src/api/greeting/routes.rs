// Greeting route definitions

use axum::{routing::get, Router};

use super::handler;

/// Registers GET /greeting (axum answers HEAD from the same handler)
pub fn greeting_routes() -> Router {
    Router::new().route("/greeting", get(handler::greeting_handler))
}
