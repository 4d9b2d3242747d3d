/*
 * Responsibility
 * - GET /health (liveness probe)
 * - Mounted outside the session gate; must answer 200 with no credentials
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "healthy"})))
}
