use axum::{response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    message: &'static str,
    version: &'static str,
}

/// GET /api/
pub async fn root() -> impl IntoResponse {
    Json(ApiInfo {
        message: "Energy-Morph API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

/// GET /api/health
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}
