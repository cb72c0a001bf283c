use super::store_error::StoreError;

/// Terminal outcomes of a selection request that did not produce questions.
///
/// The two empty variants are recoverable, user-facing outcomes: the caller
/// picks a "bank is empty" or "try different filters" message. They are
/// explicit variants rather than an empty vector so that callers cannot
/// confuse "zero is a valid count" with "lookup failed".
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// Mode "all" with no filters, and the tenant's bank itself is empty.
    #[error("question bank is empty for this tenant")]
    EmptyNoFilter,

    /// Filters (or an inherently filtering mode) excluded every question.
    #[error("no questions matched the requested filters")]
    EmptyWithFilter,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type SelectionResult<T> = Result<T, SelectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_convert_transparently() {
        let err: SelectionError = StoreError::Unavailable {
            reason: "connection refused".into(),
        }
        .into();
        assert!(matches!(err, SelectionError::Store(_)));
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }
}
