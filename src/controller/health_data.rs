use crate::classify::{classify_vitals, water_goal_progress, VitalFlags};
use crate::controller::page::{PageError, PageState};
use crate::models::sleep::{SleepDraft, SleepRecord};
use crate::models::vitals::{VitalSignDraft, VitalSignRecord};
use crate::models::water::{WaterIntakeDraft, WaterIntakeRecord};
use crate::session::SessionGate;
use crate::store::{RecordStore, StoreBackend, StoreError};
use crate::validation::{validate_sleep_session, validate_vital_signs, validate_water_intake};

/// Latest record of each snapshot kind, re-derived from the store on every
/// fetch. `None` means the user has no record of that kind yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthSnapshot {
    pub vitals: Option<VitalSignRecord>,
    pub water: Option<WaterIntakeRecord>,
    pub sleep: Option<SleepRecord>,
}

impl HealthSnapshot {
    /// Attention flags for the current vitals, recomputed on every call.
    pub fn vital_flags(&self) -> Option<VitalFlags> {
        self.vitals.as_ref().map(classify_vitals)
    }

    pub fn water_progress(&self) -> u8 {
        self.water.as_ref().map(water_goal_progress).unwrap_or(0)
    }
}

/// State for the health-data page: the three snapshot cards plus one form
/// per record kind. Owns the drafts so a failed save keeps the user's input.
pub struct HealthDataController<B, G> {
    store: RecordStore<B>,
    gate: G,
    state: PageState<HealthSnapshot>,
    error: Option<PageError>,
    vitals_draft: VitalSignDraft,
    water_draft: WaterIntakeDraft,
    sleep_draft: SleepDraft,
    submitting: bool,
}

impl<B: StoreBackend, G: SessionGate> HealthDataController<B, G> {
    pub fn new(backend: B, gate: G) -> Self {
        Self {
            store: RecordStore::new(backend),
            gate,
            state: PageState::Idle,
            error: None,
            vitals_draft: VitalSignDraft::default(),
            water_draft: WaterIntakeDraft::default(),
            sleep_draft: SleepDraft::default(),
            submitting: false,
        }
    }

    pub fn state(&self) -> &PageState<HealthSnapshot> {
        &self.state
    }

    pub fn error(&self) -> Option<&PageError> {
        self.error.as_ref()
    }

    /// While true the page must disable its submit actions.
    pub fn is_busy(&self) -> bool {
        self.submitting || matches!(self.state, PageState::Loading)
    }

    pub fn vitals_draft(&self) -> &VitalSignDraft {
        &self.vitals_draft
    }

    pub fn water_draft(&self) -> &WaterIntakeDraft {
        &self.water_draft
    }

    pub fn sleep_draft(&self) -> &SleepDraft {
        &self.sleep_draft
    }

    /// Replace a form draft wholesale; validation always sees a complete,
    /// consistent value.
    pub fn set_vitals_draft(&mut self, draft: VitalSignDraft) {
        self.vitals_draft = draft;
    }

    pub fn set_water_draft(&mut self, draft: WaterIntakeDraft) {
        self.water_draft = draft;
    }

    pub fn set_sleep_draft(&mut self, draft: SleepDraft) {
        self.sleep_draft = draft;
    }

    pub async fn mount(&mut self) {
        self.state = PageState::Loading;
        self.error = None;
        match self.load_snapshot().await {
            Ok(snapshot) => {
                self.state = PageState::Ready(snapshot);
            }
            Err(e) => {
                tracing::error!("failed to load health snapshot: {}", e);
                self.state = PageState::LoadFailed;
                self.error = Some(e.into());
            }
        }
    }

    /// Explicit retry after a failed load.
    pub async fn retry(&mut self) {
        self.mount().await;
    }

    /// Leaving the page discards its state; in-flight work is abandoned by
    /// dropping the pending future.
    pub fn unmount(&mut self) {
        self.state = PageState::Idle;
        self.error = None;
        self.vitals_draft = VitalSignDraft::default();
        self.water_draft = WaterIntakeDraft::default();
        self.sleep_draft = SleepDraft::default();
        self.submitting = false;
    }

    pub async fn submit_vitals(&mut self) -> Result<(), PageError> {
        if self.is_busy() {
            return Ok(());
        }
        let new = match validate_vital_signs(&self.vitals_draft) {
            Ok(new) => new,
            Err(e) => return Err(self.set_error(e.into())),
        };
        self.error = None;
        self.submitting = true;
        let user = self.gate.current_user();
        let result = self.store.create_vital_signs(user, &new).await;
        self.submitting = false;
        match result {
            Ok(record) => {
                tracing::info!("vital signs stored: {}", record.id);
                self.vitals_draft = VitalSignDraft::default();
                self.refresh().await;
                Ok(())
            }
            // Draft kept so the user can retry without re-entering data.
            Err(e) => Err(self.set_error(e.into())),
        }
    }

    pub async fn submit_water(&mut self) -> Result<(), PageError> {
        if self.is_busy() {
            return Ok(());
        }
        let new = match validate_water_intake(&self.water_draft) {
            Ok(new) => new,
            Err(e) => return Err(self.set_error(e.into())),
        };
        self.error = None;
        self.submitting = true;
        let user = self.gate.current_user();
        let result = self.store.create_water_intake(user, &new).await;
        self.submitting = false;
        match result {
            Ok(record) => {
                tracing::info!("water intake stored: {}", record.id);
                self.water_draft = WaterIntakeDraft::default();
                self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.set_error(e.into())),
        }
    }

    pub async fn submit_sleep(&mut self) -> Result<(), PageError> {
        if self.is_busy() {
            return Ok(());
        }
        let new = match validate_sleep_session(&self.sleep_draft) {
            Ok(new) => new,
            Err(e) => return Err(self.set_error(e.into())),
        };
        self.error = None;
        self.submitting = true;
        let user = self.gate.current_user();
        let result = self.store.create_sleep_session(user, &new).await;
        self.submitting = false;
        match result {
            Ok(record) => {
                tracing::info!("sleep session stored: {}", record.id);
                self.sleep_draft = SleepDraft::default();
                self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.set_error(e.into())),
        }
    }

    /// Re-derive the snapshot from the store after a successful mutation.
    /// The stored row returned by the mutation is never promoted directly.
    async fn refresh(&mut self) {
        match self.load_snapshot().await {
            Ok(snapshot) => {
                self.state = PageState::Ready(snapshot);
            }
            Err(e) => {
                // Keep showing the previous snapshot; just surface the error.
                tracing::error!("failed to refresh health snapshot: {}", e);
                self.error = Some(e.into());
            }
        }
    }

    async fn load_snapshot(&self) -> Result<HealthSnapshot, StoreError> {
        let user = self.gate.current_user();
        let vitals = self.store.latest_vital_signs(user, 1).await?;
        let water = self.store.latest_water_intake(user, 1).await?;
        let sleep = self.store.latest_sleep_sessions(user, 1).await?;
        Ok(HealthSnapshot {
            vitals: vitals.into_iter().next(),
            water: water.into_iter().next(),
            sleep: sleep.into_iter().next(),
        })
    }

    fn set_error(&mut self, error: PageError) -> PageError {
        self.error = Some(error.clone());
        error
    }
}
