use axum::{extract::State, response::Json};
use crate::db;
use crate::models::TeamsResponse;
use crate::state::AppState;

// GET /teams - Distinct team names, sorted; empty on any data error
pub async fn get_teams(State(state): State<AppState>) -> Json<TeamsResponse> {
    let teams = match state.bounded(db::get_team_names(&state.pool)).await {
        Ok(teams) => teams,
        Err(err) => {
            tracing::error!("Error fetching teams, returning empty list: {}", err);
            Vec::new()
        }
    };

    Json(TeamsResponse { teams })
}
