use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::vitals::{NewVitalSigns, VitalSignRecord};

pub async fn insert_vital_signs(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    new: &NewVitalSigns,
) -> Result<VitalSignRecord, sqlx::Error> {
    sqlx::query_as::<_, VitalSignRecord>(
        r#"
        INSERT INTO vital_signs (user_id, systolic, diastolic, heart_rate, oxygen_level)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, systolic, diastolic, heart_rate, oxygen_level, created_at
        "#,
    )
    .bind(user_id)
    .bind(new.systolic)
    .bind(new.diastolic)
    .bind(new.heart_rate)
    .bind(new.oxygen_level)
    .fetch_one(pool)
    .await
}

/// Most recent first; the caller takes index 0 as the current snapshot.
pub async fn latest_vital_signs(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<VitalSignRecord>, sqlx::Error> {
    sqlx::query_as::<_, VitalSignRecord>(
        r#"
        SELECT id, user_id, systolic, diastolic, heart_rate, oxygen_level, created_at
        FROM vital_signs
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

pub async fn delete_vital_signs(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vital_signs WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
