// Start of file: /src/api/mod.rs

/*
    * HTTP-facing features. Each sub-module owns its handler, models and routes.
*/

pub mod greeting;

// End of file: /src/api/mod.rs
