use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::water::{NewWaterIntake, WaterIntakeRecord};

pub async fn insert_water_intake(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    new: &NewWaterIntake,
) -> Result<WaterIntakeRecord, sqlx::Error> {
    sqlx::query_as::<_, WaterIntakeRecord>(
        r#"
        INSERT INTO water_intake (user_id, amount_ml)
        VALUES ($1, $2)
        RETURNING id, user_id, amount_ml, created_at
        "#,
    )
    .bind(user_id)
    .bind(new.amount_ml)
    .fetch_one(pool)
    .await
}

pub async fn latest_water_intake(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<WaterIntakeRecord>, sqlx::Error> {
    sqlx::query_as::<_, WaterIntakeRecord>(
        r#"
        SELECT id, user_id, amount_ml, created_at
        FROM water_intake
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

pub async fn delete_water_intake(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM water_intake WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
