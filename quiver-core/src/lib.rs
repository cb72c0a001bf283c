//! # quiver-core
//!
//! Foundation crate for the Quiver question selection engine.
//! Defines all IDs, taxonomy models, selection criteria, user-state records,
//! errors, config, and the store traits the engine consumes.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod criteria;
pub mod errors;
pub mod ids;
pub mod scope;
pub mod taxonomy;
pub mod traits;
pub mod user_state;

// Re-export the most commonly used types at the crate root.
pub use config::SelectionConfig;
pub use criteria::{SelectionCriteria, SelectionMode};
pub use errors::{SelectionError, SelectionResult, StoreError, StoreResult};
pub use ids::{GroupId, QuestionId, SubthemeId, TenantId, ThemeId, UserId};
pub use scope::Scope;
pub use taxonomy::{Group, ParentIndex, Question, Subtheme, Theme};
pub use user_state::{AnswerState, Bookmark, TaxonomyRef};
