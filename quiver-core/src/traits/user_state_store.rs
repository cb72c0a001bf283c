use crate::errors::StoreResult;
use crate::ids::{QuestionId, TenantId, UserId};
use crate::user_state::{AnswerState, Bookmark};

/// Indexed scans over per-user answer state and bookmarks.
///
/// All three scans are backed by (tenant, user) indexes — the incorrect
/// scan by (tenant, user, is_incorrect) — so the filter-first modes never
/// touch the question table to find their primary record set.
pub trait IUserStateStore: Send + Sync {
    /// IDs of every question the user has answered at least once.
    fn answered_question_ids(
        &self,
        tenant: &TenantId,
        user: &UserId,
    ) -> StoreResult<Vec<QuestionId>>;

    /// Answer-state records whose most recent attempt was incorrect.
    fn incorrect_states(&self, tenant: &TenantId, user: &UserId)
        -> StoreResult<Vec<AnswerState>>;

    /// All bookmarks of the user.
    fn bookmarks(&self, tenant: &TenantId, user: &UserId) -> StoreResult<Vec<Bookmark>>;
}
