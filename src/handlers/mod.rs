// Handlers Module
// This module contains the API endpoint handlers

pub mod analytics;
pub mod coins;
pub mod health;
pub mod posts;
pub mod trades;
pub mod zora;

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::Repositories;
use crate::zora::CoinsSdk;

/// Shared state handed to every handler
pub struct ApiState {
    pub repositories: Repositories,
    pub config: ApiConfig,
    pub coins: Arc<dyn CoinsSdk>,
}

// Type alias for the application state
pub type AppState = Arc<ApiState>;
