/// Failures surfaced by the external stores (question repository,
/// user-state store, order-statistics index).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend failed during {operation}: {reason}")]
    Backend {
        operation: &'static str,
        reason: String,
    },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
