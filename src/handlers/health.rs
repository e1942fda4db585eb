// Health check endpoint handler implementation

use axum::Json;

use crate::models::HealthCheckResponse;
use crate::services::health::HealthChecker;

/// Handler for GET /api/health - Reports that the API is up with the current server time
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthChecker::new().check())
}
