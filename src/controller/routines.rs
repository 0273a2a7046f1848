use uuid::Uuid;

use crate::controller::page::{PageError, PageState};
use crate::models::routine::{RoutineDraft, RoutineEntry};
use crate::session::SessionGate;
use crate::store::{RecordStore, StoreBackend, StoreError};
use crate::validation::validate_routine;

/// State for the daily-routine page: the plan in time order plus the
/// new-step form.
pub struct RoutinesController<B, G> {
    store: RecordStore<B>,
    gate: G,
    state: PageState<Vec<RoutineEntry>>,
    error: Option<PageError>,
    draft: RoutineDraft,
    submitting: bool,
}

impl<B: StoreBackend, G: SessionGate> RoutinesController<B, G> {
    pub fn new(backend: B, gate: G) -> Self {
        Self {
            store: RecordStore::new(backend),
            gate,
            state: PageState::Idle,
            error: None,
            draft: RoutineDraft::default(),
            submitting: false,
        }
    }

    pub fn state(&self) -> &PageState<Vec<RoutineEntry>> {
        &self.state
    }

    pub fn error(&self) -> Option<&PageError> {
        self.error.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.submitting || matches!(self.state, PageState::Loading)
    }

    pub fn draft(&self) -> &RoutineDraft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: RoutineDraft) {
        self.draft = draft;
    }

    pub async fn mount(&mut self) {
        self.state = PageState::Loading;
        self.error = None;
        let user = self.gate.current_user();
        match self.store.list_routines(user).await {
            Ok(routines) => {
                self.state = PageState::Ready(routines);
            }
            Err(e) => {
                tracing::error!("failed to load routines: {}", e);
                self.state = PageState::LoadFailed;
                self.error = Some(e.into());
            }
        }
    }

    pub async fn retry(&mut self) {
        self.mount().await;
    }

    pub fn unmount(&mut self) {
        self.state = PageState::Idle;
        self.error = None;
        self.draft = RoutineDraft::default();
        self.submitting = false;
    }

    pub async fn submit(&mut self) -> Result<(), PageError> {
        if self.is_busy() {
            return Ok(());
        }
        let new = match validate_routine(&self.draft) {
            Ok(new) => new,
            Err(e) => return Err(self.set_error(e.into())),
        };
        self.error = None;
        self.submitting = true;
        let user = self.gate.current_user();
        let result = self.store.create_routine(user, &new).await;
        self.submitting = false;
        match result {
            Ok(entry) => {
                tracing::info!("routine stored: {}", entry.id);
                self.draft = RoutineDraft::default();
                self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.set_error(e.into())),
        }
    }

    /// Flip a step's completion. The current status comes from the page's
    /// own list; a step that is no longer there counts as `NotFound`.
    pub async fn toggle_completed(&mut self, id: Uuid) -> Result<(), PageError> {
        if self.is_busy() {
            return Ok(());
        }
        let current = self
            .state
            .data()
            .and_then(|routines| routines.iter().find(|r| r.id == id))
            .map(|r| r.is_completed);
        let Some(current) = current else {
            let err = self.set_error(StoreError::NotFound.into());
            self.refresh().await;
            return Err(err);
        };
        self.submitting = true;
        let user = self.gate.current_user();
        let result = self.store.set_routine_completed(user, id, !current).await;
        self.submitting = false;
        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(e @ StoreError::NotFound) => {
                let err = self.set_error(e.into());
                self.refresh().await;
                Err(err)
            }
            Err(e) => Err(self.set_error(e.into())),
        }
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), PageError> {
        if self.is_busy() {
            return Ok(());
        }
        self.submitting = true;
        let user = self.gate.current_user();
        let result = self.store.delete_routine(user, id).await;
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!("routine deleted: {}", id);
                self.refresh().await;
                Ok(())
            }
            Err(e @ StoreError::NotFound) => {
                let err = self.set_error(e.into());
                self.refresh().await;
                Err(err)
            }
            Err(e) => Err(self.set_error(e.into())),
        }
    }

    async fn refresh(&mut self) {
        let user = self.gate.current_user();
        match self.store.list_routines(user).await {
            Ok(routines) => {
                self.state = PageState::Ready(routines);
            }
            Err(e) => {
                tracing::error!("failed to refresh routines: {}", e);
                self.error = Some(e.into());
            }
        }
    }

    fn set_error(&mut self, error: PageError) -> PageError {
        self.error = Some(error.clone());
        error
    }
}
