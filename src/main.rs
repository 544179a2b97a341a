use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use book_recommender::{
    api::{create_router, AppState},
    catalog,
    config::Config,
    services::FileMessageSink,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Serving without a complete catalog is not an option.
    let catalog = match catalog::load_all(&config.data_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, data_dir = %config.data_dir.display(), "Failed to load catalog");
            return Err(e).context("Failed to load catalog");
        }
    };
    let messages = FileMessageSink::new(&config.messages_path);
    let state = AppState::new(catalog, messages);

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!(%address, messages_path = %config.messages_path.display(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
