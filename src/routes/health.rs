use axum::{extract::State, http::StatusCode, response::Json};
use crate::models::{HealthResponse, MessageResponse};
use crate::state::AppState;

// GET / - Liveness acknowledgment
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Backend is running!".to_string(),
    })
}

// GET /health - Pool status from in-process counters, no query issued
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, label) = if state.pool.is_closed() {
        (StatusCode::SERVICE_UNAVAILABLE, "closed")
    } else {
        (StatusCode::OK, "ok")
    };

    let response = HealthResponse {
        status: label.to_string(),
        pool_size: state.pool.size(),
        idle_connections: state.pool.num_idle(),
        query_timeout_ms: state.query_timeout.as_millis() as u64,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
