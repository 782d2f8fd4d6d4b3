// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting pieces of the server shell: error mapping,
    * the JSON error envelope and request logging.
*/

pub mod error_handler;
pub mod request_logger;
pub mod response_handler;

// End of file: /src/utils/mod.rs
