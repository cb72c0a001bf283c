//! The aggregate index: one treap per (tenant, scope), plus the write-side
//! trigger contract.

use dashmap::DashMap;

use quiver_core::constants::TAXONOMY_DEPTH;
use quiver_core::errors::StoreResult;
use quiver_core::ids::{QuestionId, TenantId};
use quiver_core::scope::Scope;
use quiver_core::taxonomy::Question;
use quiver_core::traits::IOrderIndex;

use crate::treap::OrderStatTreap;

/// Concurrent map of per-(tenant, scope) order-statistics treaps.
///
/// Reads (`count`, `element_at_rank`) take a shard read lock for the one
/// scope they touch. The write-side triggers are idempotent: re-applying a
/// hook after a partial failure never double counts, because treap inserts
/// and removes have set semantics. A hook against a scope that has no treap
/// yet creates it on the spot (self-healing on key-not-found).
#[derive(Debug, Default)]
pub struct AggregateIndex {
    scopes: DashMap<(TenantId, Scope), OrderStatTreap>,
}

impl AggregateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scopes a question belongs to: global, its theme, and — when
    /// assigned — its subtheme and group.
    fn scopes_of(question: &Question) -> Vec<Scope> {
        let mut scopes = vec![Scope::Global, Scope::Theme(question.theme.clone())];
        if let Some(subtheme) = &question.subtheme {
            scopes.push(Scope::Subtheme(subtheme.clone()));
        }
        if let Some(group) = &question.group {
            scopes.push(Scope::Group(group.clone()));
        }
        // Global plus at most one scope per taxonomy level.
        debug_assert!(scopes.len() <= 1 + TAXONOMY_DEPTH);
        scopes
    }

    /// Write-side hook: a question was inserted.
    pub fn question_inserted(&self, question: &Question) {
        for scope in Self::scopes_of(question) {
            self.scopes
                .entry((question.tenant.clone(), scope))
                .or_default()
                .insert(question.id.clone());
        }
    }

    /// Write-side hook: a question was deleted.
    pub fn question_removed(&self, question: &Question) {
        for scope in Self::scopes_of(question) {
            if let Some(mut treap) = self.scopes.get_mut(&(question.tenant.clone(), scope)) {
                treap.remove(&question.id);
            }
            // No treap for the scope: nothing to remove. Kept silent so a
            // retried delete after a partial failure stays idempotent.
        }
    }

    /// Write-side hook: a question's taxonomy fields changed.
    ///
    /// Removing by the old placement and inserting by the new one keeps
    /// every scope count equal to the number of matching questions, even
    /// when old and new share scopes (set semantics make the overlap a
    /// no-op).
    pub fn question_replaced(&self, old: &Question, new: &Question) {
        self.question_removed(old);
        self.question_inserted(new);
    }
}

impl IOrderIndex for AggregateIndex {
    fn count(&self, tenant: &TenantId, scope: &Scope) -> StoreResult<u64> {
        Ok(self
            .scopes
            .get(&(tenant.clone(), scope.clone()))
            .map(|treap| treap.len() as u64)
            .unwrap_or(0))
    }

    fn element_at_rank(
        &self,
        tenant: &TenantId,
        scope: &Scope,
        rank: u64,
    ) -> StoreResult<Option<QuestionId>> {
        Ok(self
            .scopes
            .get(&(tenant.clone(), scope.clone()))
            .and_then(|treap| treap.at_rank(rank as usize).cloned()))
    }
}
