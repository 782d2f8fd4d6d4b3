// Start of file: /src/config/mod.rs

/*
* Configuration loaded from the environment (and .env outside production).
*/

pub mod environment;

// End of file: /src/config/mod.rs
