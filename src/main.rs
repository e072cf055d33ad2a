use anyhow::Context;
use coursebook::logging::init_tracing;
use coursebook::router::init_router;
use coursebook::state::init_app_state;
use coursebook_config::{LoggingConfig, ServerConfig};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(&LoggingConfig::from_env())?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await?;
    let app = init_router(state);

    let listener = TcpListener::bind(server_config.address())
        .await
        .with_context(|| format!("Failed to bind {}", server_config.address()))?;
    let address = listener.local_addr()?;

    info!("🚀 Server running on http://{}", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
