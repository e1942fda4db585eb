// Coins Blog API server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coins_blog_api::config::ApiConfig;
use coins_blog_api::services::upload_service::ensure_uploads_dir;
use coins_blog_api::zora::{CoinsSdk, ZoraClient};
use coins_blog_api::{app, build_state};

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    ensure_uploads_dir(&config.uploads_dir)
        .await
        .expect("Failed to create uploads directory");
    tracing::info!("Serving uploads from {}", config.uploads_dir.display());

    let coins: Arc<dyn CoinsSdk> =
        Arc::new(ZoraClient::new(&config.zora).expect("Failed to create Zora client"));
    if config.zora.api_key.is_none() {
        tracing::warn!("ZORA_API_KEY is not set; Zora requests may be rate limited");
    }

    let addr: SocketAddr = config.server_addr().parse().expect("Invalid address");
    let app = app(build_state(config, coins));

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
