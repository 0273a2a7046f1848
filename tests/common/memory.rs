//! In-memory `StoreBackend` double. Behaves like the Postgres backend at
//! the contract level: user scoping, ordering, NotFound on zero rows, and
//! server-assigned ids/timestamps. Also counts backend calls so tests can
//! prove the adapter fails fast before the store is ever touched.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use vitalog::models::medication::{MedicationCatalogOption, MedicationEntry, NewMedication};
use vitalog::models::routine::{NewRoutine, RoutineEntry};
use vitalog::models::sleep::{NewSleepSession, SleepRecord};
use vitalog::models::vitals::{NewVitalSigns, VitalSignRecord};
use vitalog::models::water::{NewWaterIntake, WaterIntakeRecord};
use vitalog::store::{StoreBackend, StoreError};

#[derive(Default)]
struct Inner {
    vitals: Vec<VitalSignRecord>,
    water: Vec<WaterIntakeRecord>,
    sleep: Vec<SleepRecord>,
    medications: Vec<MedicationEntry>,
    catalog: Vec<MedicationCatalogOption>,
    routines: Vec<RoutineEntry>,
    fail_next: Option<StoreError>,
    calls: u64,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    ticks: Arc<AtomicI64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many calls actually reached the backend.
    pub fn backend_calls(&self) -> u64 {
        self.inner.lock().unwrap().calls
    }

    /// Make the next backend call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        self.inner.lock().unwrap().fail_next = Some(error);
    }

    pub fn seed_catalog(&self, options: Vec<MedicationCatalogOption>) {
        self.inner.lock().unwrap().catalog = options;
    }

    /// Monotonic server-assigned timestamps so insertion order is never
    /// ambiguous.
    fn next_created_at(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(tick)
    }

    fn begin(inner: &mut Inner) -> Result<(), StoreError> {
        inner.calls += 1;
        match inner.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl StoreBackend for MemoryStore {
    async fn insert_vital_signs(
        &self,
        user_id: Uuid,
        new: &NewVitalSigns,
    ) -> Result<VitalSignRecord, StoreError> {
        let created_at = self.next_created_at();
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let record = VitalSignRecord {
            id: Uuid::new_v4(),
            user_id,
            systolic: new.systolic,
            diastolic: new.diastolic,
            heart_rate: new.heart_rate,
            oxygen_level: new.oxygen_level,
            created_at,
        };
        inner.vitals.push(record.clone());
        Ok(record)
    }

    async fn latest_vital_signs(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<VitalSignRecord>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let mut rows: Vec<_> = inner
            .vitals
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn delete_vital_signs(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let before = inner.vitals.len();
        inner.vitals.retain(|r| !(r.id == id && r.user_id == user_id));
        if inner.vitals.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn insert_water_intake(
        &self,
        user_id: Uuid,
        new: &NewWaterIntake,
    ) -> Result<WaterIntakeRecord, StoreError> {
        let created_at = self.next_created_at();
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let record = WaterIntakeRecord {
            id: Uuid::new_v4(),
            user_id,
            amount_ml: new.amount_ml,
            created_at,
        };
        inner.water.push(record.clone());
        Ok(record)
    }

    async fn latest_water_intake(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WaterIntakeRecord>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let mut rows: Vec<_> = inner
            .water
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn delete_water_intake(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let before = inner.water.len();
        inner.water.retain(|r| !(r.id == id && r.user_id == user_id));
        if inner.water.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn insert_sleep_session(
        &self,
        user_id: Uuid,
        new: &NewSleepSession,
    ) -> Result<SleepRecord, StoreError> {
        let created_at = self.next_created_at();
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let record = SleepRecord {
            id: Uuid::new_v4(),
            user_id,
            duration_minutes: new.duration_minutes,
            quality_rating: new.quality_rating,
            created_at,
        };
        inner.sleep.push(record.clone());
        Ok(record)
    }

    async fn latest_sleep_sessions(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<SleepRecord>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let mut rows: Vec<_> = inner
            .sleep
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn delete_sleep_session(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let before = inner.sleep.len();
        inner.sleep.retain(|r| !(r.id == id && r.user_id == user_id));
        if inner.sleep.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn insert_medication(
        &self,
        user_id: Uuid,
        new: &NewMedication,
    ) -> Result<MedicationEntry, StoreError> {
        let created_at = self.next_created_at();
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let entry = MedicationEntry {
            id: Uuid::new_v4(),
            user_id,
            name: new.name.clone(),
            dosage: new.dosage.clone(),
            frequency: new.frequency,
            time_of_day: new.time_of_day,
            category: new.category,
            notes: new.notes.clone(),
            reminder_enabled: new.reminder_enabled,
            created_at,
        };
        inner.medications.push(entry.clone());
        Ok(entry)
    }

    async fn list_medications(&self, user_id: Uuid) -> Result<Vec<MedicationEntry>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let mut rows: Vec<_> = inner
            .medications
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.time_of_day.cmp(&b.time_of_day));
        Ok(rows)
    }

    async fn delete_medication(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let before = inner.medications.len();
        inner
            .medications
            .retain(|m| !(m.id == id && m.user_id == user_id));
        if inner.medications.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_catalog_options(&self) -> Result<Vec<MedicationCatalogOption>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let mut rows = inner.catalog.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert_routine(
        &self,
        user_id: Uuid,
        new: &NewRoutine,
    ) -> Result<RoutineEntry, StoreError> {
        let created_at = self.next_created_at();
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let entry = RoutineEntry {
            id: Uuid::new_v4(),
            user_id,
            time_of_day: new.time_of_day,
            activity: new.activity.clone(),
            category: new.category,
            is_completed: false,
            created_at,
        };
        inner.routines.push(entry.clone());
        Ok(entry)
    }

    async fn list_routines(&self, user_id: Uuid) -> Result<Vec<RoutineEntry>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let mut rows: Vec<_> = inner
            .routines
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.time_of_day.cmp(&b.time_of_day));
        Ok(rows)
    }

    async fn set_routine_completed(
        &self,
        user_id: Uuid,
        id: Uuid,
        is_completed: bool,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let entry = inner
            .routines
            .iter_mut()
            .find(|r| r.id == id && r.user_id == user_id)
            .ok_or(StoreError::NotFound)?;
        entry.is_completed = is_completed;
        Ok(())
    }

    async fn delete_routine(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::begin(&mut inner)?;
        let before = inner.routines.len();
        inner
            .routines
            .retain(|r| !(r.id == id && r.user_id == user_id));
        if inner.routines.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
