use crate::errors::StoreResult;
use crate::ids::{QuestionId, TenantId};
use crate::scope::Scope;

/// Per-(tenant, scope) counting and rank access over the question
/// collection, both O(log n).
///
/// The index is kept in sync by the write-side trigger contract: idempotent
/// insert/remove/replace hooks fired on every question mutation. Consumers
/// must never assume the element at a given rank is stable across calls —
/// a concurrent insert or delete can shift ranks between `count` and
/// `element_at_rank`. A rank that resolves to `None` is skipped, not an
/// error.
pub trait IOrderIndex: Send + Sync {
    /// Number of questions currently in the scope.
    fn count(&self, tenant: &TenantId, scope: &Scope) -> StoreResult<u64>;

    /// The question at 0-based `rank` within the scope, or `None` if the
    /// rank is (no longer) occupied.
    fn element_at_rank(
        &self,
        tenant: &TenantId,
        scope: &Scope,
        rank: u64,
    ) -> StoreResult<Option<QuestionId>>;
}
