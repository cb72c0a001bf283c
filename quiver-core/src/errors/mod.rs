//! Error types for the selection engine and its consumed stores.

mod selection_error;
mod store_error;

pub use selection_error::{SelectionError, SelectionResult};
pub use store_error::{StoreError, StoreResult};
