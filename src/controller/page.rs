use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Lifecycle of a page's fetched data. Submission-in-flight is tracked
/// separately by each controller (`is_busy`), since the page keeps showing
/// its `Ready` data while a form is being saved.
///
/// `LoadFailed` is terminal until an explicit `retry()` re-enters `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Idle,
    Loading,
    Ready(T),
    LoadFailed,
}

impl<T> PageState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// What lands in a page's single error slot. Last write wins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PageError {
    /// The banner/inline text the page shows for this error.
    pub fn user_message(&self) -> String {
        match self {
            PageError::Validation(e) => e.to_string(),
            PageError::Store(StoreError::Unauthenticated) => {
                "You need to sign in to view this content".to_string()
            }
            PageError::Store(StoreError::NotFound) => {
                "That record no longer exists".to_string()
            }
            PageError::Store(_) => "Something went wrong. Please try again".to_string(),
        }
    }
}
