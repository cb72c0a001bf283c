//! The four retrieval strategies, one per `SelectionMode`.
//!
//! Peers with no shared mutable state: each consumes the resolver output
//! and produces a deduplicated candidate pool, which the engine then
//! downsamples. None of them ever scans the full question table.

pub(crate) mod all;
pub(crate) mod bookmarked;
pub(crate) mod incorrect;
pub(crate) mod unanswered;

use std::collections::HashSet;

use quiver_core::config::SelectionConfig;
use quiver_core::errors::StoreResult;
use quiver_core::ids::{GroupId, QuestionId, SubthemeId, TenantId, ThemeId, UserId};
use quiver_core::scope::Scope;
use quiver_core::traits::{IOrderIndex, IQuestionRepository, IUserStateStore};
use quiver_core::user_state::TaxonomyRef;

use crate::resolver::{check_hierarchy_match, EffectiveHierarchy};

use std::collections::BTreeSet;

/// Read-only request context shared by every strategy.
pub(crate) struct StrategyCtx<'a> {
    pub repo: &'a dyn IQuestionRepository,
    pub user_state: &'a dyn IUserStateStore,
    pub index: &'a dyn IOrderIndex,
    pub config: &'a SelectionConfig,
    pub tenant: &'a TenantId,
    pub user: &'a UserId,
}

/// Questions under `subtheme` whose group is absent or outside the
/// overriding set — the subtheme-complement of a group selection.
pub(crate) fn subtheme_complement(
    ctx: &StrategyCtx<'_>,
    subtheme: &SubthemeId,
    overriding: &BTreeSet<GroupId>,
    cap: usize,
) -> StoreResult<Vec<QuestionId>> {
    let questions = ctx.repo.by_tenant_and_subtheme(ctx.tenant, subtheme, cap)?;
    Ok(questions
        .into_iter()
        .filter(|q| match &q.group {
            None => true,
            Some(group) => !overriding.contains(group),
        })
        .map(|q| q.id)
        .collect())
}

/// Questions under `theme` whose subtheme is absent or outside the covering
/// set — the theme-complement of subordinate subtheme/group selections.
pub(crate) fn theme_complement(
    ctx: &StrategyCtx<'_>,
    theme: &ThemeId,
    covering: &BTreeSet<SubthemeId>,
    cap: usize,
) -> StoreResult<Vec<QuestionId>> {
    let questions = ctx.repo.by_tenant_and_theme(ctx.tenant, theme, cap)?;
    Ok(questions
        .into_iter()
        .filter(|q| match &q.subtheme {
            None => true,
            Some(subtheme) => !covering.contains(subtheme),
        })
        .map(|q| q.id)
        .collect())
}

/// Override-aware exhaustive scan: every question ID matching the effective
/// hierarchy, via per-node indexed scans (groups, effective subthemes,
/// subtheme- and theme-complements, effective themes). `cap` bounds each
/// individual scan, so it acts as a per-scope buffer, not a global limit.
pub(crate) fn scan_filtered_ids(
    ctx: &StrategyCtx<'_>,
    hierarchy: &EffectiveHierarchy,
    cap: usize,
) -> StoreResult<Vec<QuestionId>> {
    let mut pools: Vec<Vec<QuestionId>> = Vec::new();

    for group in &hierarchy.selected_groups {
        let questions = ctx.repo.by_tenant_and_group(ctx.tenant, group, cap)?;
        pools.push(questions.into_iter().map(|q| q.id).collect());
    }
    for subtheme in &hierarchy.effective_subthemes {
        let questions = ctx.repo.by_tenant_and_subtheme(ctx.tenant, subtheme, cap)?;
        pools.push(questions.into_iter().map(|q| q.id).collect());
    }
    for subtheme in &hierarchy.selected_subthemes {
        if let Some(overriding) = hierarchy.groups_by_subtheme.get(subtheme) {
            pools.push(subtheme_complement(ctx, subtheme, overriding, cap)?);
        }
    }
    for theme in &hierarchy.effective_themes {
        let questions = ctx.repo.by_tenant_and_theme(ctx.tenant, theme, cap)?;
        pools.push(questions.into_iter().map(|q| q.id).collect());
    }
    for theme in &hierarchy.selected_themes {
        if hierarchy.effective_themes.contains(theme) {
            continue;
        }
        if let Some(covering) = hierarchy.covering_subthemes_by_theme.get(theme) {
            pools.push(theme_complement(ctx, theme, covering, cap)?);
        }
    }

    Ok(union_pools(pools))
}

/// Union candidate pools preserving first-seen order, dropping duplicates.
pub(crate) fn union_pools(pools: Vec<Vec<QuestionId>>) -> Vec<QuestionId> {
    let mut seen: HashSet<QuestionId> = HashSet::new();
    let mut union = Vec::new();
    for pool in pools {
        for id in pool {
            if seen.insert(id.clone()) {
                union.push(id);
            }
        }
    }
    union
}

/// Filter user-state records against the hierarchy.
///
/// Uses the taxonomy denormalized onto the record when present; otherwise
/// one question read per record. Records whose question has since been
/// deleted are dropped.
pub(crate) fn filter_user_records(
    ctx: &StrategyCtx<'_>,
    hierarchy: &EffectiveHierarchy,
    records: impl IntoIterator<Item = (QuestionId, Option<TaxonomyRef>)>,
) -> StoreResult<Vec<QuestionId>> {
    let mut seen: HashSet<QuestionId> = HashSet::new();
    let mut matches = Vec::new();

    for (question, taxonomy) in records {
        if !seen.insert(question.clone()) {
            continue;
        }
        if hierarchy.is_empty() {
            matches.push(question);
            continue;
        }
        let taxonomy = match taxonomy {
            Some(t) => t,
            None => match ctx.repo.get(ctx.tenant, &question)? {
                Some(q) => TaxonomyRef {
                    theme: q.theme,
                    subtheme: q.subtheme,
                    group: q.group,
                },
                None => continue,
            },
        };
        if check_hierarchy_match(
            &taxonomy.theme,
            taxonomy.subtheme.as_ref(),
            taxonomy.group.as_ref(),
            hierarchy,
        ) {
            matches.push(question);
        }
    }
    Ok(matches)
}

/// Enumerate the tenant's global scope in rank order, capped. Used by the
/// unanswered strategy when no taxonomy filter is present: the index is
/// the only collaborator that can list a tenant's bank without a
/// full-table scan.
pub(crate) fn enumerate_global(
    ctx: &StrategyCtx<'_>,
    cap: usize,
) -> StoreResult<Vec<QuestionId>> {
    let total = ctx.index.count(ctx.tenant, &Scope::Global)? as usize;
    let mut ids = Vec::with_capacity(total.min(cap));
    let mut seen: HashSet<QuestionId> = HashSet::new();
    for rank in 0..total.min(cap) {
        // Concurrent writers can vacate or repeat ranks mid-walk; skip and
        // dedup rather than fail.
        if let Some(id) = ctx
            .index
            .element_at_rank(ctx.tenant, &Scope::Global, rank as u64)?
        {
            if seen.insert(id.clone()) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}
