use anyhow::Context;
use property_scout::api::{self, AppState};
use property_scout::config::Config;
use property_scout::scrapers::FetchPipeline;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("property_scout=info")),
        )
        .init();

    info!("🏠 Property Scout - investment property search");

    let config = Config::from_env();

    let saved_searches = config.load_saved_searches();
    if !saved_searches.is_empty() {
        info!("Loaded {} saved searches", saved_searches.len());
    }

    let pipeline = FetchPipeline::standard(&config)?;
    info!("Fetch pipeline ready with {} tiers", pipeline.tier_count());

    let state = AppState {
        pipeline: Arc::new(pipeline),
        default_search: saved_searches.into_iter().next(),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Exited");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl c event");
    info!("Shutting down");
}
