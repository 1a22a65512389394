use crate::models::Prediction;

/// Seed assumed for a team with no rows in `teams`.
pub const DEFAULT_SEED: i64 = 8;

const TIE_PROBABILITY: f64 = 50.0;
const MIN_PROBABILITY: f64 = 51.0;
const MAX_PROBABILITY: f64 = 99.0;

/// What the scoring heuristic knows about one side of a matchup.
#[derive(Debug, Clone)]
pub struct TeamProfile {
    pub name: String,
    pub seed: i64,
    /// Head-to-head wins with this team listed first.
    pub wins: i64,
}

impl TeamProfile {
    pub fn new(name: impl Into<String>, seed: Option<i64>, wins: i64) -> Self {
        Self {
            name: name.into(),
            seed: seed.unwrap_or(DEFAULT_SEED),
            wins,
        }
    }

    pub fn score(&self) -> i64 {
        (20 - self.seed) + self.wins * 3
    }
}

/// Picks the stronger team. Ties go to `first` at exactly 50%; any other
/// result is clamped into [51, 99].
pub fn predict_winner(first: &TeamProfile, second: &TeamProfile) -> Prediction {
    let (score1, score2) = (first.score(), second.score());

    if score1 == score2 {
        return Prediction {
            winner: first.name.clone(),
            probability: TIE_PROBABILITY,
        };
    }

    let winner = if score1 > score2 { first } else { second };
    let raw = round_to_tenth(50.0 + (score1 - score2).abs() as f64 * 2.0);

    Prediction {
        winner: winner.name.clone(),
        probability: raw.clamp(MIN_PROBABILITY, MAX_PROBABILITY),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
