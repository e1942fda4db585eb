// Business logic service implementations

pub mod analytics_service;
pub mod coin_service;
pub mod health;
pub mod post_service;
pub mod trade_service;
pub mod upload_service;
