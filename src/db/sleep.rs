use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::sleep::{NewSleepSession, SleepRecord};

pub async fn insert_sleep_session(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    new: &NewSleepSession,
) -> Result<SleepRecord, sqlx::Error> {
    sqlx::query_as::<_, SleepRecord>(
        r#"
        INSERT INTO sleep_sessions (user_id, duration_minutes, quality_rating)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, duration_minutes, quality_rating, created_at
        "#,
    )
    .bind(user_id)
    .bind(new.duration_minutes)
    .bind(new.quality_rating)
    .fetch_one(pool)
    .await
}

pub async fn latest_sleep_sessions(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<SleepRecord>, sqlx::Error> {
    sqlx::query_as::<_, SleepRecord>(
        r#"
        SELECT id, user_id, duration_minutes, quality_rating, created_at
        FROM sleep_sessions
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn delete_sleep_session(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sleep_sessions WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
