use shopping_catalog::config::AppConfig;
use shopping_catalog::router::create_app_router;
use shopping_catalog::state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.bind_addr()?;
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
