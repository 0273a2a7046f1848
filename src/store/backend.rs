use uuid::Uuid;

use crate::models::medication::{MedicationCatalogOption, MedicationEntry, NewMedication};
use crate::models::routine::{NewRoutine, RoutineEntry};
use crate::models::sleep::{NewSleepSession, SleepRecord};
use crate::models::vitals::{NewVitalSigns, VitalSignRecord};
use crate::models::water::{NewWaterIntake, WaterIntakeRecord};
use crate::store::error::StoreError;

/// The query/insert/update/delete boundary to the persisted store. The core
/// only ever talks to the store through this trait; `PgStore` is the
/// production implementation.
///
/// Ordering contracts: `latest_*` is `created_at` descending (index 0 is the
/// current snapshot); `list_medications`/`list_routines` are `time_of_day`
/// ascending (schedule order). Deleting or updating a missing row yields
/// `StoreError::NotFound`.
#[allow(async_fn_in_trait)]
pub trait StoreBackend {
    async fn insert_vital_signs(
        &self,
        user_id: Uuid,
        new: &NewVitalSigns,
    ) -> Result<VitalSignRecord, StoreError>;

    async fn latest_vital_signs(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<VitalSignRecord>, StoreError>;

    async fn delete_vital_signs(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError>;

    async fn insert_water_intake(
        &self,
        user_id: Uuid,
        new: &NewWaterIntake,
    ) -> Result<WaterIntakeRecord, StoreError>;

    async fn latest_water_intake(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WaterIntakeRecord>, StoreError>;

    async fn delete_water_intake(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError>;

    async fn insert_sleep_session(
        &self,
        user_id: Uuid,
        new: &NewSleepSession,
    ) -> Result<SleepRecord, StoreError>;

    async fn latest_sleep_sessions(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<SleepRecord>, StoreError>;

    async fn delete_sleep_session(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError>;

    async fn insert_medication(
        &self,
        user_id: Uuid,
        new: &NewMedication,
    ) -> Result<MedicationEntry, StoreError>;

    async fn list_medications(&self, user_id: Uuid) -> Result<Vec<MedicationEntry>, StoreError>;

    async fn delete_medication(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError>;

    /// Read-only reference data, not user-owned. Name order.
    async fn list_catalog_options(&self) -> Result<Vec<MedicationCatalogOption>, StoreError>;

    async fn insert_routine(
        &self,
        user_id: Uuid,
        new: &NewRoutine,
    ) -> Result<RoutineEntry, StoreError>;

    async fn list_routines(&self, user_id: Uuid) -> Result<Vec<RoutineEntry>, StoreError>;

    async fn set_routine_completed(
        &self,
        user_id: Uuid,
        id: Uuid,
        is_completed: bool,
    ) -> Result<(), StoreError>;

    async fn delete_routine(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError>;
}
