//! Interfaces of the external collaborators the engine consumes.
//!
//! The engine holds no state of its own between requests; everything it
//! reads comes through these traits. Persistence, tenancy enforcement, and
//! taxonomy CRUD all live behind them, outside this workspace.

mod order_index;
mod question_repository;
mod taxonomy_store;
mod user_state_store;

pub use order_index::IOrderIndex;
pub use question_repository::IQuestionRepository;
pub use taxonomy_store::ITaxonomyStore;
pub use user_state_store::IUserStateStore;
