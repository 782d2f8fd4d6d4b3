/*
* Greeting API: the GET /greeting endpoint, its query binding and response model.
*/

pub mod handler;
pub mod model;
pub mod routes;

pub use routes::greeting_routes; // Greeting route definitions
