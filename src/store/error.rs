use thiserror::Error;

/// Closed taxonomy for everything that can go wrong between the core and
/// the persisted store. One attempt per call; the caller surfaces the
/// failure, nothing here retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No resolved user identity; the store was never contacted.
    #[error("authentication required")]
    Unauthenticated,

    /// The targeted record does not exist (or no longer does).
    #[error("record not found")]
    NotFound,

    /// Transient infrastructure failure; retrying later may succeed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the row itself. Not expected in normal operation.
    #[error("store rejected the write: {0}")]
    ConstraintViolation(String),
}
