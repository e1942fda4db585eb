// Coins Blog API: posts, trades and analytics backing post coins on Zora

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod zora;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use config::ApiConfig;
use db::Store;
use handlers::{analytics, coins, health, posts, trades, zora as zora_handlers, ApiState, AppState};
use services::upload_service::UPLOADS_ROUTE;
use zora::CoinsSdk;

/// Wires configuration, an empty store and the coins provider into handler state
pub fn build_state(config: ApiConfig, coins: Arc<dyn CoinsSdk>) -> AppState {
    Arc::new(ApiState {
        repositories: Store::new().into_repositories(),
        config,
        coins,
    })
}

/// Builds the HTTP router with all API routes and middleware
pub fn app(state: AppState) -> Router {
    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    let uploads = ServeDir::new(&state.config.uploads_dir);
    let body_limit = state.config.max_upload_bytes;
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/posts", get(posts::get_posts).post(posts::create_post))
        .route("/api/posts/{id}", get(posts::get_post_by_id))
        .route("/api/trades", get(trades::get_trades).post(trades::create_trade))
        .route("/api/analytics/trending", get(analytics::get_trending))
        .route("/api/analytics/creators", get(analytics::get_creators))
        .route("/api/coins", post(coins::create_coin))
        .route("/api/coins/{address}/buy", post(coins::buy_coin))
        .route("/api/coins/{address}/sell", post(coins::sell_coin))
        .route("/api/coins/{address}/price", get(coins::get_price))
        .route("/api/zora/coins", get(zora_handlers::get_coins))
        .route("/api/zora/coins/{address}", get(zora_handlers::get_coin))
        .route("/api/zora/creators", get(zora_handlers::get_creators))
        .route("/api/zora/profiles/{identifier}", get(zora_handlers::get_profile))
        .route("/api/zora/search", get(zora_handlers::search))
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
