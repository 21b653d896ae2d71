use library_catalog::{
    api::{handlers::AppState, router::create_router},
    application::Library,
    config::{AppConfig, DEFAULT_LOG_FILTER},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Server configuration
    let config = AppConfig::from_env()?;
    let addr = config.listen_addr()?;

    // The catalog lives only for the lifetime of the process
    let library = Library::in_memory();
    tracing::debug!(?library, "Library initialized");

    // Create application state
    let app_state = Arc::new(AppState::new(library));

    // Create router
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
