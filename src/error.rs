use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Please select exactly 2 teams.")]
    TeamSelection,
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("query did not finish within {0:?}")]
    Timeout(Duration),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::TeamSelection => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Timeout(limit) => {
                tracing::error!("Data store query timed out after {:?}", limit);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Data store timed out".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
