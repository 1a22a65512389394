use serde::{Deserialize, Serialize};

/// Body of `POST /predict`
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub teams: Option<Vec<String>>,
}

impl PredictRequest {
    /// The two selected team names in request order, or `None` when the
    /// selection is missing or does not hold exactly two names.
    pub fn into_pair(self) -> Option<(String, String)> {
        let [first, second] = <[String; 2]>::try_from(self.teams?).ok()?;
        Some((first, second))
    }
}

/// Outcome of a matchup prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub winner: String,
    pub probability: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub pool_size: u32,
    pub idle_connections: usize,
    pub query_timeout_ms: u64,
    pub timestamp: i64,
}

/// Scores of one stored matchup row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MatchupScore {
    pub score1: Option<i64>,
    pub score2: Option<i64>,
}

impl MatchupScore {
    /// True when the first-named team outscored the second.
    pub fn first_team_won(&self) -> bool {
        matches!((self.score1, self.score2), (Some(s1), Some(s2)) if s1 > s2)
    }
}
