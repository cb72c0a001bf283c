//! Mode "all": random draws from the order-statistics index.
//!
//! The unfiltered request is the ultra-fast path — one random draw from the
//! tenant's global scope, never touching the question table. Filtered
//! requests fan out one sub-query per resolved node (draws for effective
//! nodes, indexed complement scans for overridden ones), run them in
//! parallel, and union the results.

use rayon::prelude::*;
use tracing::debug;

use quiver_core::errors::StoreResult;
use quiver_core::ids::{QuestionId, SubthemeId, ThemeId};
use quiver_core::scope::Scope;
use quiver_sampling::{draw_from_scope, SelectionRng};

use crate::resolver::EffectiveHierarchy;
use crate::strategies::{subtheme_complement, theme_complement, union_pools, StrategyCtx};

enum Job {
    Draw(Scope),
    SubthemeComplement(SubthemeId),
    ThemeComplement(ThemeId),
}

pub(crate) fn gather(
    ctx: &StrategyCtx<'_>,
    hierarchy: &EffectiveHierarchy,
    count: usize,
    rng: &SelectionRng,
) -> StoreResult<Vec<QuestionId>> {
    if hierarchy.is_empty() {
        let mut scope_rng = rng.fork(&Scope::Global.key());
        return draw_from_scope(
            ctx.index,
            ctx.tenant,
            &Scope::Global,
            count,
            ctx.config.draw_attempt_multiplier,
            &mut scope_rng,
        );
    }

    // Job order is deterministic (ordered sets), so the unioned pool is
    // too — parallelism only reorders execution, not results.
    let mut jobs: Vec<Job> = Vec::new();
    for group in &hierarchy.selected_groups {
        jobs.push(Job::Draw(Scope::Group(group.clone())));
    }
    for subtheme in &hierarchy.effective_subthemes {
        jobs.push(Job::Draw(Scope::Subtheme(subtheme.clone())));
    }
    for subtheme in &hierarchy.selected_subthemes {
        if hierarchy.groups_by_subtheme.contains_key(subtheme) {
            jobs.push(Job::SubthemeComplement(subtheme.clone()));
        }
    }
    for theme in &hierarchy.effective_themes {
        jobs.push(Job::Draw(Scope::Theme(theme.clone())));
    }
    for theme in &hierarchy.selected_themes {
        if !hierarchy.effective_themes.contains(theme)
            && hierarchy.covering_subthemes_by_theme.contains_key(theme)
        {
            jobs.push(Job::ThemeComplement(theme.clone()));
        }
    }

    let pools: Vec<Vec<QuestionId>> = jobs
        .par_iter()
        .map(|job| match job {
            Job::Draw(scope) => {
                // Each scope gets its own seed-derived stream so parallel
                // draws stay reproducible.
                let mut scope_rng = rng.fork(&scope.key());
                draw_from_scope(
                    ctx.index,
                    ctx.tenant,
                    scope,
                    count,
                    ctx.config.draw_attempt_multiplier,
                    &mut scope_rng,
                )
            }
            Job::SubthemeComplement(subtheme) => subtheme_complement(
                ctx,
                subtheme,
                &hierarchy.groups_by_subtheme[subtheme],
                ctx.config.scan_result_cap,
            ),
            Job::ThemeComplement(theme) => theme_complement(
                ctx,
                theme,
                &hierarchy.covering_subthemes_by_theme[theme],
                ctx.config.scan_result_cap,
            ),
        })
        .collect::<StoreResult<Vec<_>>>()?;

    let union = union_pools(pools);
    debug!(candidates = union.len(), "mode=all gathered candidates");
    Ok(union)
}
