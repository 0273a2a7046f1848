use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::medication::{MedicationEntry, NewMedication};

pub async fn insert_medication(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    new: &NewMedication,
) -> Result<MedicationEntry, sqlx::Error> {
    sqlx::query_as::<_, MedicationEntry>(
        r#"
        INSERT INTO medications
            (user_id, name, dosage, frequency, time_of_day, category, notes, reminder_enabled)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, user_id, name, dosage, frequency, time_of_day, category, notes,
                  reminder_enabled, created_at
        "#,
    )
    .bind(user_id)
    .bind(&new.name)
    .bind(&new.dosage)
    .bind(new.frequency)
    .bind(new.time_of_day)
    .bind(new.category)
    .bind(&new.notes)
    .bind(new.reminder_enabled)
    .fetch_one(pool)
    .await
}

/// Schedule order: medications are browsed as a day plan, not a history.
pub async fn list_medications(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<MedicationEntry>, sqlx::Error> {
    sqlx::query_as::<_, MedicationEntry>(
        r#"
        SELECT id, user_id, name, dosage, frequency, time_of_day, category, notes,
               reminder_enabled, created_at
        FROM medications
        WHERE user_id = $1
        ORDER BY time_of_day ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn delete_medication(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM medications WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
