//! Kinerja API Server
//!
//! Main entry point for the Kinerja aggregation service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kinerja_api::{AppState, create_router};
use kinerja_core::ranking::BadgePolicy;
use kinerja_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinerja=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    let badges = BadgePolicy::from(config.badges);
    info!(
        top_count = badges.top_count,
        two_bottom_from = badges.two_bottom_from,
        "Badge policy configured"
    );

    // Create application state and router
    let state = AppState::new(badges);
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
