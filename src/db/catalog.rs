use sqlx::{Pool, Postgres};

use crate::models::medication::MedicationCatalogOption;

/// The full read-only catalog, name order. Not user-scoped: reference data.
pub async fn list_catalog_options(
    pool: &Pool<Postgres>,
) -> Result<Vec<MedicationCatalogOption>, sqlx::Error> {
    sqlx::query_as::<_, MedicationCatalogOption>(
        r#"
        SELECT id, name, category, default_dosage, default_frequency, notes
        FROM medication_catalog
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
