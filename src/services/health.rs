// Health check service implementation

use chrono::{SecondsFormat, Utc};

use crate::models::HealthCheckResponse;

pub struct HealthChecker;

impl HealthChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self) -> HealthCheckResponse {
        HealthCheckResponse {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}
