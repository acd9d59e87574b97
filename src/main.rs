//! Headline Reader - voice skill that reads news headlines aloud
//!
//! A Rust backend implementing the dialog session state machine that lets a
//! user page through a section's headlines with spoken commands.

mod api;
mod config;
mod news;
mod skill;
mod speech;
mod state_machine;

use api::{create_router, AppState};
use config::SkillConfig;
use news::{ContentProvider, CredentialSource, LoggingProvider, NytClient};
use skill::TurnOrchestrator;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "headline_reader=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = SkillConfig::from_env()?;
    if matches!(config.key_source, news::KeySource::Missing) {
        tracing::warn!("No Top Stories API key configured. Set NYT_API_KEY or NYT_API_KEY_FILE.");
    }
    if config.application_id.is_none() {
        tracing::warn!("HEADLINES_SKILL_ID not set; accepting requests for any application");
    }

    // Content provider
    let nyt = NytClient::new(config.nyt_base_url.as_deref())?;
    let provider: Arc<dyn ContentProvider> = Arc::new(LoggingProvider::new(nyt));
    let credentials: Arc<dyn CredentialSource> = Arc::new(config.key_source.clone());

    // Create application state
    let state = AppState::new(
        TurnOrchestrator::new(provider, credentials),
        config.application_id.clone(),
    );

    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Headline Reader listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
