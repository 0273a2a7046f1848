use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::DatabaseSettings;
use crate::db;
use crate::models::medication::{MedicationCatalogOption, MedicationEntry, NewMedication};
use crate::models::routine::{NewRoutine, RoutineEntry};
use crate::models::sleep::{NewSleepSession, SleepRecord};
use crate::models::vitals::{NewVitalSigns, VitalSignRecord};
use crate::models::water::{NewWaterIntake, WaterIntakeRecord};
use crate::store::backend::StoreBackend;
use crate::store::error::StoreError;

/// Production store backend over Postgres.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a lazily-connecting pool from settings. Connections are only
    /// established on first use.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(32)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect_lazy(settings.connection_string().expose_secret())?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Translate a driver error into the closed taxonomy the core understands.
fn map_store_err(operation: &'static str, e: sqlx::Error) -> StoreError {
    tracing::error!("store operation `{}` failed: {}", operation, e);
    match e {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db_err) => StoreError::ConstraintViolation(db_err.to_string()),
        other => StoreError::Unavailable(other.to_string()),
    }
}

/// `DELETE`/`UPDATE` report success through the affected-row count.
fn require_affected(operation: &'static str, rows: u64) -> Result<(), StoreError> {
    if rows == 0 {
        tracing::warn!("store operation `{}` matched no rows", operation);
        return Err(StoreError::NotFound);
    }
    Ok(())
}

impl StoreBackend for PgStore {
    async fn insert_vital_signs(
        &self,
        user_id: Uuid,
        new: &NewVitalSigns,
    ) -> Result<VitalSignRecord, StoreError> {
        db::vitals::insert_vital_signs(&self.pool, user_id, new)
            .await
            .map_err(|e| map_store_err("insert vital_signs", e))
    }

    async fn latest_vital_signs(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<VitalSignRecord>, StoreError> {
        db::vitals::latest_vital_signs(&self.pool, user_id, limit)
            .await
            .map_err(|e| map_store_err("latest vital_signs", e))
    }

    async fn delete_vital_signs(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let rows = db::vitals::delete_vital_signs(&self.pool, user_id, id)
            .await
            .map_err(|e| map_store_err("delete vital_signs", e))?;
        require_affected("delete vital_signs", rows)
    }

    async fn insert_water_intake(
        &self,
        user_id: Uuid,
        new: &NewWaterIntake,
    ) -> Result<WaterIntakeRecord, StoreError> {
        db::water::insert_water_intake(&self.pool, user_id, new)
            .await
            .map_err(|e| map_store_err("insert water_intake", e))
    }

    async fn latest_water_intake(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WaterIntakeRecord>, StoreError> {
        db::water::latest_water_intake(&self.pool, user_id, limit)
            .await
            .map_err(|e| map_store_err("latest water_intake", e))
    }

    async fn delete_water_intake(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let rows = db::water::delete_water_intake(&self.pool, user_id, id)
            .await
            .map_err(|e| map_store_err("delete water_intake", e))?;
        require_affected("delete water_intake", rows)
    }

    async fn insert_sleep_session(
        &self,
        user_id: Uuid,
        new: &NewSleepSession,
    ) -> Result<SleepRecord, StoreError> {
        db::sleep::insert_sleep_session(&self.pool, user_id, new)
            .await
            .map_err(|e| map_store_err("insert sleep_sessions", e))
    }

    async fn latest_sleep_sessions(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<SleepRecord>, StoreError> {
        db::sleep::latest_sleep_sessions(&self.pool, user_id, limit)
            .await
            .map_err(|e| map_store_err("latest sleep_sessions", e))
    }

    async fn delete_sleep_session(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let rows = db::sleep::delete_sleep_session(&self.pool, user_id, id)
            .await
            .map_err(|e| map_store_err("delete sleep_sessions", e))?;
        require_affected("delete sleep_sessions", rows)
    }

    async fn insert_medication(
        &self,
        user_id: Uuid,
        new: &NewMedication,
    ) -> Result<MedicationEntry, StoreError> {
        db::medications::insert_medication(&self.pool, user_id, new)
            .await
            .map_err(|e| map_store_err("insert medications", e))
    }

    async fn list_medications(&self, user_id: Uuid) -> Result<Vec<MedicationEntry>, StoreError> {
        db::medications::list_medications(&self.pool, user_id)
            .await
            .map_err(|e| map_store_err("list medications", e))
    }

    async fn delete_medication(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let rows = db::medications::delete_medication(&self.pool, user_id, id)
            .await
            .map_err(|e| map_store_err("delete medications", e))?;
        require_affected("delete medications", rows)
    }

    async fn list_catalog_options(&self) -> Result<Vec<MedicationCatalogOption>, StoreError> {
        db::catalog::list_catalog_options(&self.pool)
            .await
            .map_err(|e| map_store_err("list medication_catalog", e))
    }

    async fn insert_routine(
        &self,
        user_id: Uuid,
        new: &NewRoutine,
    ) -> Result<RoutineEntry, StoreError> {
        db::routines::insert_routine(&self.pool, user_id, new)
            .await
            .map_err(|e| map_store_err("insert routines", e))
    }

    async fn list_routines(&self, user_id: Uuid) -> Result<Vec<RoutineEntry>, StoreError> {
        db::routines::list_routines(&self.pool, user_id)
            .await
            .map_err(|e| map_store_err("list routines", e))
    }

    async fn set_routine_completed(
        &self,
        user_id: Uuid,
        id: Uuid,
        is_completed: bool,
    ) -> Result<(), StoreError> {
        let rows = db::routines::set_routine_completed(&self.pool, user_id, id, is_completed)
            .await
            .map_err(|e| map_store_err("update routines", e))?;
        require_affected("update routines", rows)
    }

    async fn delete_routine(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let rows = db::routines::delete_routine(&self.pool, user_id, id)
            .await
            .map_err(|e| map_store_err("delete routines", e))?;
        require_affected("delete routines", rows)
    }
}
