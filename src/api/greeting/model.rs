// Greeting response entity and query-string binding

use serde::Serialize;

/// Every greeting carries the same identifier
pub const GREETING_ID: u64 = 1;

/// Name used when the `name` query parameter is absent
pub const DEFAULT_NAME: &str = "World";

/// Response body for GET /greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub id: u64,
    pub content: String,
}

impl Greeting {
    pub fn new(name: &str) -> Self {
        Self {
            id: GREETING_ID,
            content: format!("Hello {name}!"),
        }
    }
}

/// Query parameters accepted by GET /greeting.
/// `name` falls back to `DEFAULT_NAME` only when missing; `?name=` binds "".
/// Repeated `name` values are joined with ',' (`?name=a&name=b` -> "a,b").
#[derive(Debug, PartialEq, Eq)]
pub struct GreetingParams {
    pub name: String,
}

impl GreetingParams {
    /// Binds from decoded query pairs; unrelated keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let names: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value)
            .collect();

        let name: String = if names.is_empty() {
            DEFAULT_NAME.to_owned()
        } else {
            names.join(",")
        };

        Self { name }
    }
}
