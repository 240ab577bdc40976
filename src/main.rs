use tracing_subscriber::EnvFilter;

use verse_search::api::create_router;
use verse_search::config::Config;
use verse_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Embedding provider: {} ({})",
        config.embedding.provider,
        config.embedding.model
    );

    let state = AppState::new(config.clone())?;

    // A failed load is logged and the server still starts; requests get 503
    // and retry initialization until the dataset appears.
    if config.eager_init {
        state.ensure_ready().await;
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
