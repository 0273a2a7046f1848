use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::routine::{NewRoutine, RoutineEntry};

pub async fn insert_routine(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    new: &NewRoutine,
) -> Result<RoutineEntry, sqlx::Error> {
    sqlx::query_as::<_, RoutineEntry>(
        r#"
        INSERT INTO routines (user_id, time_of_day, activity, category)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, time_of_day, activity, category, is_completed, created_at
        "#,
    )
    .bind(user_id)
    .bind(new.time_of_day)
    .bind(&new.activity)
    .bind(new.category)
    .fetch_one(pool)
    .await
}

pub async fn list_routines(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<RoutineEntry>, sqlx::Error> {
    sqlx::query_as::<_, RoutineEntry>(
        r#"
        SELECT id, user_id, time_of_day, activity, category, is_completed, created_at
        FROM routines
        WHERE user_id = $1
        ORDER BY time_of_day ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn set_routine_completed(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    id: Uuid,
    is_completed: bool,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE routines SET is_completed = $1 WHERE id = $2 AND user_id = $3")
            .bind(is_completed)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub async fn delete_routine(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM routines WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
