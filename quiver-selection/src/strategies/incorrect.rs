//! Mode "incorrect": the user's incorrect-answer records are primary.
//!
//! The record set is fetched through the (tenant, user, is_incorrect)
//! index; the taxonomy filter is then tested per record, preferring the
//! taxonomy denormalized onto the record over a question read.

use tracing::debug;

use quiver_core::errors::StoreResult;
use quiver_core::ids::QuestionId;

use crate::resolver::EffectiveHierarchy;
use crate::strategies::{filter_user_records, StrategyCtx};

pub(crate) fn gather(
    ctx: &StrategyCtx<'_>,
    hierarchy: &EffectiveHierarchy,
) -> StoreResult<Vec<QuestionId>> {
    let records = ctx.user_state.incorrect_states(ctx.tenant, ctx.user)?;
    if records.is_empty() {
        return Ok(Vec::new());
    }
    let matches = filter_user_records(
        ctx,
        hierarchy,
        records.into_iter().map(|r| (r.question, r.taxonomy)),
    )?;
    debug!(candidates = matches.len(), "mode=incorrect gathered candidates");
    Ok(matches)
}
