use uuid::Uuid;

use crate::catalog::medication_options_for;
use crate::controller::page::{PageError, PageState};
use crate::models::medication::{
    MedicationCatalogOption, MedicationCategory, MedicationDraft, MedicationEntry,
};
use crate::session::SessionGate;
use crate::store::{RecordStore, StoreBackend, StoreError};
use crate::validation::validate_medication;

/// Data behind the medications page: the user's schedule (time order) and
/// the read-only catalog it picks from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationsPage {
    pub medications: Vec<MedicationEntry>,
    pub catalog: Vec<MedicationCatalogOption>,
}

pub struct MedicationsController<B, G> {
    store: RecordStore<B>,
    gate: G,
    state: PageState<MedicationsPage>,
    error: Option<PageError>,
    selected_category: MedicationCategory,
    draft: MedicationDraft,
    submitting: bool,
}

impl<B: StoreBackend, G: SessionGate> MedicationsController<B, G> {
    pub fn new(backend: B, gate: G) -> Self {
        Self {
            store: RecordStore::new(backend),
            gate,
            state: PageState::Idle,
            error: None,
            selected_category: MedicationCategory::Prescription,
            draft: MedicationDraft::default(),
            submitting: false,
        }
    }

    pub fn state(&self) -> &PageState<MedicationsPage> {
        &self.state
    }

    pub fn error(&self) -> Option<&PageError> {
        self.error.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.submitting || matches!(self.state, PageState::Loading)
    }

    pub fn draft(&self) -> &MedicationDraft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: MedicationDraft) {
        self.draft = draft;
    }

    pub fn selected_category(&self) -> MedicationCategory {
        self.selected_category
    }

    /// Narrow the option picker. Only affects which catalog entries are
    /// offered; the draft keeps its own category until an option is applied.
    pub fn select_category(&mut self, category: MedicationCategory) {
        self.selected_category = category;
    }

    /// Catalog entries offered under the currently selected category.
    pub fn options(&self) -> Vec<&MedicationCatalogOption> {
        match self.state.data() {
            Some(page) => medication_options_for(&page.catalog, self.selected_category),
            None => Vec::new(),
        }
    }

    /// Fill the draft from a catalog option. Unknown ids are ignored, the
    /// way a stale picker selection should be.
    pub fn select_option(&mut self, option_id: Uuid) {
        let Some(page) = self.state.data() else {
            return;
        };
        if let Some(option) = page.catalog.iter().find(|o| o.id == option_id) {
            self.draft = self.draft.clone().apply_option(option);
        }
    }

    pub async fn mount(&mut self) {
        self.state = PageState::Loading;
        self.error = None;
        match self.load_page().await {
            Ok(page) => {
                self.state = PageState::Ready(page);
            }
            Err(e) => {
                tracing::error!("failed to load medications page: {}", e);
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
        self.selected_category = MedicationCategory::Prescription;
        self.draft = MedicationDraft::default();
        self.submitting = false;
    }

    pub async fn submit(&mut self) -> Result<(), PageError> {
        if self.is_busy() {
            return Ok(());
        }
        let new = match validate_medication(&self.draft) {
            Ok(new) => new,
            Err(e) => return Err(self.set_error(e.into())),
        };
        self.error = None;
        self.submitting = true;
        let user = self.gate.current_user();
        let result = self.store.create_medication(user, &new).await;
        self.submitting = false;
        match result {
            Ok(entry) => {
                tracing::info!("medication stored: {}", entry.id);
                self.draft = MedicationDraft::default();
                self.refresh_list().await;
                Ok(())
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
        let result = self.store.delete_medication(user, id).await;
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!("medication deleted: {}", id);
                self.refresh_list().await;
                Ok(())
            }
            Err(e @ StoreError::NotFound) => {
                // The list is stale; reconcile it with the store.
                let err = self.set_error(e.into());
                self.refresh_list().await;
                Err(err)
            }
            Err(e) => Err(self.set_error(e.into())),
        }
    }

    /// The catalog is reference data; only the schedule changes after a
    /// mutation, so only the schedule is re-fetched.
    async fn refresh_list(&mut self) {
        let user = self.gate.current_user();
        match self.store.list_medications(user).await {
            Ok(medications) => {
                if let PageState::Ready(page) = &mut self.state {
                    page.medications = medications;
                }
            }
            Err(e) => {
                tracing::error!("failed to refresh medications: {}", e);
                self.error = Some(e.into());
            }
        }
    }

    async fn load_page(&self) -> Result<MedicationsPage, StoreError> {
        let user = self.gate.current_user();
        let medications = self.store.list_medications(user).await?;
        let catalog = self.store.catalog_options().await?;
        Ok(MedicationsPage {
            medications,
            catalog,
        })
    }

    fn set_error(&mut self, error: PageError) -> PageError {
        self.error = Some(error.clone());
        error
    }
}
