use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod models;
mod prediction;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting matchup predictor api...");

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let pool = db::connect(&config)
        .await
        .expect("Failed to open database");

    tracing::info!("Database opened read-only at {}", config.database_url);

    let addr = config.addr();
    let state = AppState::new(pool, config.query_timeout);
    let app = routes::router(state, config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
