use std::sync::Arc;

use axum::{body::to_bytes, response::Response};
use serde_json::Value;

use shared_config::AppConfig;

/// Config with zero simulated latency so handler tests finish immediately.
pub fn instant_config() -> Arc<AppConfig> {
    Arc::new(AppConfig::instant())
}

pub fn failing_booking_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        booking_simulate_failure: true,
        ..AppConfig::instant()
    })
}

/// Read a router response body as JSON. Panics on malformed bodies; test use only.
pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
