use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::state::AppState;

pub mod health;
pub mod predict;
pub mod teams;

pub fn router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    // Only the configured frontend origins may call the API from a browser
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/teams", get(teams::get_teams))
        .route("/predict", post(predict::predict))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
