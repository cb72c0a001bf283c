//! Mode "bookmarked": the user's bookmarks are primary.

use tracing::debug;

use quiver_core::errors::StoreResult;
use quiver_core::ids::QuestionId;

use crate::resolver::EffectiveHierarchy;
use crate::strategies::{filter_user_records, StrategyCtx};

pub(crate) fn gather(
    ctx: &StrategyCtx<'_>,
    hierarchy: &EffectiveHierarchy,
) -> StoreResult<Vec<QuestionId>> {
    let bookmarks = ctx.user_state.bookmarks(ctx.tenant, ctx.user)?;
    if bookmarks.is_empty() {
        return Ok(Vec::new());
    }
    let matches = filter_user_records(
        ctx,
        hierarchy,
        bookmarks.into_iter().map(|b| (b.question, b.taxonomy)),
    )?;
    debug!(
        candidates = matches.len(),
        "mode=bookmarked gathered candidates"
    );
    Ok(matches)
}
