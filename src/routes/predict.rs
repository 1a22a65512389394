use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqliteConnection;
use crate::db;
use crate::error::ApiError;
use crate::models::{PredictRequest, Prediction};
use crate::prediction::{predict_winner, TeamProfile};
use crate::state::AppState;

// POST /predict - Pick a winner from seeds and head-to-head history
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Prediction>, ApiError> {
    let (team1, team2) = payload
        .map_err(|rejection| {
            tracing::debug!("Rejected predict body: {}", rejection);
            ApiError::TeamSelection
        })?
        .0
        .into_pair()
        .ok_or(ApiError::TeamSelection)?;

    // Released back to the pool when the handler returns
    let mut conn = state.bounded(state.pool.acquire()).await?;

    let first = load_profile(&state, &mut conn, &team1, &team2).await?;
    let second = load_profile(&state, &mut conn, &team2, &team1).await?;

    let prediction = predict_winner(&first, &second);
    tracing::info!(
        "Predicted {} vs {}: {} ({}%)",
        team1,
        team2,
        prediction.winner,
        prediction.probability
    );

    Ok(Json(prediction))
}

async fn load_profile(
    state: &AppState,
    conn: &mut SqliteConnection,
    team: &str,
    opponent: &str,
) -> Result<TeamProfile, ApiError> {
    let seed = state.bounded(db::get_latest_seed(&mut *conn, team)).await?;
    let wins = state
        .bounded(db::count_head_to_head_wins(&mut *conn, team, opponent))
        .await?;

    Ok(TeamProfile::new(team, seed, wins))
}
