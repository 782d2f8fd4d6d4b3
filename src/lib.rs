// Library root for the greeting service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::core::server::{create_app, apply_layers, setup_listener, shutdown_signal};
