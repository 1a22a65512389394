//! In-memory datasets for tests.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// One connection, never recycled, so the in-memory database lives as long
/// as the pool.
pub async fn empty_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

pub async fn seeded_pool(
    teams: &[(&str, Option<i64>, i64)],
    matchups: &[(&str, &str, i64, i64)],
) -> SqlitePool {
    let pool = empty_pool().await;

    sqlx::query(
        r#"CREATE TABLE teams (
            team_name TEXT,
            seed INTEGER,
            year INTEGER,
            region TEXT
        )"#,
    )
    .execute(&pool)
    .await
    .expect("create teams");

    sqlx::query(
        r#"CREATE TABLE matchups (
            year INTEGER,
            team1_name TEXT,
            team2_name TEXT,
            score1 INTEGER,
            score2 INTEGER
        )"#,
    )
    .execute(&pool)
    .await
    .expect("create matchups");

    for &(name, seed, year) in teams {
        sqlx::query("INSERT INTO teams (team_name, seed, year) VALUES (?, ?, ?)")
            .bind(name)
            .bind(seed)
            .bind(year)
            .execute(&pool)
            .await
            .expect("insert team");
    }

    for &(team1, team2, score1, score2) in matchups {
        sqlx::query("INSERT INTO matchups (team1_name, team2_name, score1, score2) VALUES (?, ?, ?, ?)")
            .bind(team1)
            .bind(team2)
            .bind(score1)
            .bind(score2)
            .execute(&pool)
            .await
            .expect("insert matchup");
    }

    pool
}
