// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;
use tracing::info;

use greeting_service::core::logging::init_tracing;
use greeting_service::core::server::{create_app, setup_listener, shutdown_signal};
use greeting_service::config::environment::EnvironmentVariables;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let env: EnvironmentVariables = EnvironmentVariables::load()?;
    info!(environment = %env.environment, "Configuration loaded");

    let app: Router = create_app(&env);
    let listener: TcpListener = setup_listener(&env).await?;

    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
