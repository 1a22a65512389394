use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::SqliteExecutor;
use std::str::FromStr;

use crate::config::Config;
use crate::models::MatchupScore;

#[cfg(test)]
pub mod fixtures;

/// Opens the externally provided dataset read-only. Fails if the file
/// does not exist.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.query_timeout)
        .connect_with(options)
        .await
}

// Team queries
pub async fn get_team_names(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query_scalar::<_, Option<String>>(
        r#"SELECT DISTINCT team_name FROM teams"#
    )
    .fetch_all(pool)
    .await?;

    let mut names: Vec<String> = rows
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();

    Ok(names)
}

/// Seed from the most recent year the team appears in, if any.
pub async fn get_latest_seed<'e, E>(executor: E, team_name: &str) -> Result<Option<i64>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let seed = sqlx::query_scalar::<_, Option<i64>>(
        r#"SELECT seed FROM teams WHERE team_name = ? ORDER BY year DESC LIMIT 1"#
    )
    .bind(team_name)
    .fetch_optional(executor)
    .await?;

    Ok(seed.flatten())
}

// Matchup queries - direction matters, team_a must be stored as team1_name
pub async fn get_matchup_scores<'e, E>(
    executor: E,
    team_a: &str,
    team_b: &str,
) -> Result<Vec<MatchupScore>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, MatchupScore>(
        r#"SELECT score1, score2 FROM matchups WHERE team1_name = ? AND team2_name = ?"#
    )
    .bind(team_a)
    .bind(team_b)
    .fetch_all(executor)
    .await
}

pub async fn count_head_to_head_wins<'e, E>(
    executor: E,
    team_a: &str,
    team_b: &str,
) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let scores = get_matchup_scores(executor, team_a, team_b).await?;
    Ok(scores.iter().filter(|row| row.first_team_won()).count() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::{empty_pool, seeded_pool};

    #[tokio::test]
    async fn test_team_names_sorted_distinct_non_empty() {
        let pool = seeded_pool(
            &[
                ("Kansas", Some(1), 2023),
                ("Duke", Some(4), 2023),
                ("Kansas", Some(2), 2024),
                ("", Some(9), 2024),
                ("Arizona", Some(2), 2024),
            ],
            &[],
        )
        .await;
        sqlx::query("INSERT INTO teams (team_name, seed, year) VALUES (NULL, 5, 2024)")
            .execute(&pool)
            .await
            .unwrap();

        let names = get_team_names(&pool).await.unwrap();
        assert_eq!(names, vec!["Arizona", "Duke", "Kansas"]);
    }

    #[tokio::test]
    async fn test_team_names_missing_table() {
        let pool = empty_pool().await;
        assert!(get_team_names(&pool).await.is_err());
    }

    #[tokio::test]
    async fn test_latest_seed_uses_most_recent_year() {
        let pool = seeded_pool(
            &[
                ("Houston", Some(5), 2021),
                ("Houston", Some(1), 2024),
                ("Houston", Some(2), 2022),
            ],
            &[],
        )
        .await;

        assert_eq!(get_latest_seed(&pool, "Houston").await.unwrap(), Some(1));
        assert_eq!(get_latest_seed(&pool, "Zzz").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_latest_seed_null_is_none() {
        let pool = seeded_pool(&[("Iona", Some(13), 2023), ("Iona", None, 2024)], &[]).await;
        assert_eq!(get_latest_seed(&pool, "Iona").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_head_to_head_wins_are_directional() {
        let pool = seeded_pool(
            &[],
            &[
                ("Alpha", "Beta", 70, 60),
                ("Alpha", "Beta", 80, 75),
                ("Alpha", "Beta", 50, 55),
                ("Alpha", "Beta", 66, 66),
                ("Beta", "Alpha", 90, 60),
                ("Alpha", "Gamma", 90, 10),
            ],
        )
        .await;

        assert_eq!(count_head_to_head_wins(&pool, "Alpha", "Beta").await.unwrap(), 2);
        assert_eq!(count_head_to_head_wins(&pool, "Beta", "Alpha").await.unwrap(), 1);
        assert_eq!(count_head_to_head_wins(&pool, "Gamma", "Alpha").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_queries_on_single_connection() {
        let pool = seeded_pool(&[("Alpha", Some(1), 2024)], &[("Alpha", "Beta", 3, 1)]).await;
        let mut conn = pool.acquire().await.unwrap();

        assert_eq!(get_latest_seed(&mut *conn, "Alpha").await.unwrap(), Some(1));
        assert_eq!(count_head_to_head_wins(&mut *conn, "Alpha", "Beta").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_connect_missing_file_fails() {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("sqlite://definitely/not/here.db".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(connect(&config).await.is_err());
    }
}
