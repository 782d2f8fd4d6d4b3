// Start of file: /src/core/mod.rs

/*
    * Process-level setup: logging and the HTTP server itself.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
