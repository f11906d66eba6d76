//! Job board API server

use jobboard_api::seed::seed_jobs;
use jobboard_api::{AppState, routes};
use jobboard_config::{ServerConfig, load_server_config};
use jobboard_store::InMemoryJobRepo;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match std::env::var("JOBBOARD_CONFIG") {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            load_server_config(&path)?
        }
        Err(_) => ServerConfig::default(),
    };
    if let Ok(listen) = std::env::var("JOBBOARD_LISTEN") {
        config.listen = listen.parse()?;
    }

    // Construct the store empty, then seed it once
    let job_repo = Arc::new(InMemoryJobRepo::new());
    seed_jobs(job_repo.as_ref(), &config)?;

    let state = AppState::new(job_repo, &config);

    // Build router
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    info!("Starting server on {}", config.listen);

    let listener = TcpListener::bind(config.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
