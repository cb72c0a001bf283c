//! Random-access draw from an order-statistics scope.

use std::collections::HashSet;

use tracing::debug;

use quiver_core::errors::StoreResult;
use quiver_core::ids::{QuestionId, TenantId};
use quiver_core::scope::Scope;
use quiver_core::traits::IOrderIndex;

use crate::rng::SelectionRng;

/// Draw up to `desired` distinct question IDs from one scope by repeatedly
/// resolving random ranks, without ever scanning the scope.
///
/// Ranks are tracked in a tried-set so the same rank is never resolved
/// twice. Concurrent writers can shift or vacate ranks between the `count`
/// read and a rank lookup; a vacated rank is skipped silently and only
/// costs an attempt. The loop stops at `desired` hits or after
/// `min(desired * attempt_multiplier, total)` distinct ranks have been
/// tried, so index staleness bounds yield, never correctness or latency.
pub fn draw_from_scope(
    index: &dyn IOrderIndex,
    tenant: &TenantId,
    scope: &Scope,
    desired: usize,
    attempt_multiplier: usize,
    rng: &mut SelectionRng,
) -> StoreResult<Vec<QuestionId>> {
    if desired == 0 {
        return Ok(Vec::new());
    }
    let total = index.count(tenant, scope)? as usize;
    if total == 0 {
        return Ok(Vec::new());
    }

    let budget = (desired.saturating_mul(attempt_multiplier)).min(total);
    let mut tried: HashSet<u64> = HashSet::with_capacity(budget);
    let mut found: Vec<QuestionId> = Vec::with_capacity(desired.min(total));

    while found.len() < desired && tried.len() < budget {
        let rank = rng.below(total) as u64;
        if !tried.insert(rank) {
            continue;
        }
        match index.element_at_rank(tenant, scope, rank)? {
            Some(id) => {
                // Two distinct ranks can resolve to the same ID if the scope
                // shifted under us; dedup on the way in.
                if !found.contains(&id) {
                    found.push(id);
                }
            }
            None => {
                debug!(scope = %scope.key(), rank, "rank vacated during draw, skipping");
            }
        }
    }

    if found.len() < desired {
        debug!(
            scope = %scope.key(),
            desired,
            yielded = found.len(),
            "draw ended below target after attempt budget"
        );
    }
    Ok(found)
}
