//! Mode "unanswered": hierarchy first, then subtract the answered set.
//!
//! The hierarchy scan must come before the user-state filter. Drawing a
//! random population-wide sample first and filtering it afterwards would
//! return few or zero matches for a narrow filter and report a false
//! "nothing found", so this strategy fetches matching IDs exhaustively —
//! buffered at 3× the target as a first pass — and only then removes what
//! the user has already answered.

use std::collections::HashSet;

use tracing::debug;

use quiver_core::errors::StoreResult;
use quiver_core::ids::QuestionId;

use crate::resolver::EffectiveHierarchy;
use crate::strategies::{enumerate_global, scan_filtered_ids, StrategyCtx};

pub(crate) fn gather(
    ctx: &StrategyCtx<'_>,
    hierarchy: &EffectiveHierarchy,
    count: usize,
) -> StoreResult<Vec<QuestionId>> {
    let answered: HashSet<QuestionId> = ctx
        .user_state
        .answered_question_ids(ctx.tenant, ctx.user)?
        .into_iter()
        .collect();

    // Non-binding buffer: over-fetch so that subtracting the answered set
    // usually still fills the request without a second scan. The scan cap
    // can sit below the requested count; the floor at `count` wins then.
    let buffer = count
        .saturating_mul(ctx.config.unanswered_buffer_multiplier)
        .min(ctx.config.scan_result_cap)
        .max(count);

    let candidates = if hierarchy.is_empty() {
        enumerate_global(ctx, ctx.config.scan_result_cap)?
    } else {
        scan_filtered_ids(ctx, hierarchy, buffer)?
    };

    let mut unanswered: Vec<QuestionId> = candidates
        .into_iter()
        .filter(|id| !answered.contains(id))
        .collect();

    // The buffered scan can under-fill when the user answered most of a
    // node; fall back to the full matching set before giving up.
    if unanswered.len() < count && !hierarchy.is_empty() {
        debug!(
            yielded = unanswered.len(),
            count, "buffered scan under-filled; rescanning without buffer"
        );
        unanswered = scan_filtered_ids(ctx, hierarchy, ctx.config.scan_result_cap)?
            .into_iter()
            .filter(|id| !answered.contains(id))
            .collect();
    }

    debug!(
        candidates = unanswered.len(),
        answered = answered.len(),
        "mode=unanswered gathered candidates"
    );
    Ok(unanswered)
}
