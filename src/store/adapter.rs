use uuid::Uuid;

use crate::models::medication::{MedicationCatalogOption, MedicationEntry, NewMedication};
use crate::models::routine::{NewRoutine, RoutineEntry};
use crate::models::sleep::{NewSleepSession, SleepRecord};
use crate::models::vitals::{NewVitalSigns, VitalSignRecord};
use crate::models::water::{NewWaterIntake, WaterIntakeRecord};
use crate::store::backend::StoreBackend;
use crate::store::error::StoreError;

/// User-scoping adapter in front of the store backend. Every user-owned
/// operation takes the identity resolved at call time and fails fast with
/// `Unauthenticated` before the backend is touched when there is none.
/// One attempt per call, no retries.
pub struct RecordStore<B> {
    backend: B,
}

impl<B: StoreBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn require_user(user: Option<Uuid>) -> Result<Uuid, StoreError> {
        user.ok_or_else(|| {
            tracing::warn!("store call attempted without an authenticated user");
            StoreError::Unauthenticated
        })
    }

    pub async fn create_vital_signs(
        &self,
        user: Option<Uuid>,
        new: &NewVitalSigns,
    ) -> Result<VitalSignRecord, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.insert_vital_signs(user_id, new).await
    }

    pub async fn latest_vital_signs(
        &self,
        user: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<VitalSignRecord>, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.latest_vital_signs(user_id, limit).await
    }

    pub async fn delete_vital_signs(&self, user: Option<Uuid>, id: Uuid) -> Result<(), StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.delete_vital_signs(user_id, id).await
    }

    pub async fn create_water_intake(
        &self,
        user: Option<Uuid>,
        new: &NewWaterIntake,
    ) -> Result<WaterIntakeRecord, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.insert_water_intake(user_id, new).await
    }

    pub async fn latest_water_intake(
        &self,
        user: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<WaterIntakeRecord>, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.latest_water_intake(user_id, limit).await
    }

    pub async fn delete_water_intake(&self, user: Option<Uuid>, id: Uuid) -> Result<(), StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.delete_water_intake(user_id, id).await
    }

    pub async fn create_sleep_session(
        &self,
        user: Option<Uuid>,
        new: &NewSleepSession,
    ) -> Result<SleepRecord, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.insert_sleep_session(user_id, new).await
    }

    pub async fn latest_sleep_sessions(
        &self,
        user: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<SleepRecord>, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.latest_sleep_sessions(user_id, limit).await
    }

    pub async fn delete_sleep_session(
        &self,
        user: Option<Uuid>,
        id: Uuid,
    ) -> Result<(), StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.delete_sleep_session(user_id, id).await
    }

    pub async fn create_medication(
        &self,
        user: Option<Uuid>,
        new: &NewMedication,
    ) -> Result<MedicationEntry, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.insert_medication(user_id, new).await
    }

    pub async fn list_medications(
        &self,
        user: Option<Uuid>,
    ) -> Result<Vec<MedicationEntry>, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.list_medications(user_id).await
    }

    pub async fn delete_medication(&self, user: Option<Uuid>, id: Uuid) -> Result<(), StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.delete_medication(user_id, id).await
    }

    /// Reference data, readable without user scoping.
    pub async fn catalog_options(&self) -> Result<Vec<MedicationCatalogOption>, StoreError> {
        self.backend.list_catalog_options().await
    }

    pub async fn create_routine(
        &self,
        user: Option<Uuid>,
        new: &NewRoutine,
    ) -> Result<RoutineEntry, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.insert_routine(user_id, new).await
    }

    pub async fn list_routines(&self, user: Option<Uuid>) -> Result<Vec<RoutineEntry>, StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.list_routines(user_id).await
    }

    pub async fn set_routine_completed(
        &self,
        user: Option<Uuid>,
        id: Uuid,
        is_completed: bool,
    ) -> Result<(), StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.set_routine_completed(user_id, id, is_completed).await
    }

    pub async fn delete_routine(&self, user: Option<Uuid>, id: Uuid) -> Result<(), StoreError> {
        let user_id = Self::require_user(user)?;
        self.backend.delete_routine(user_id, id).await
    }
}
