//! Taxonomy override resolution.
//!
//! Specificity wins: selecting a group suppresses direct inclusion of its
//! parent subtheme and grandparent theme; selecting a subtheme suppresses
//! its theme. A suppressed node that was itself explicitly selected is
//! later represented by its *complement* (everything under it not covered
//! by the more specific selection), so that e.g. selecting a subtheme plus
//! one of its groups yields group-content ∪ subtheme-complement — never
//! the double-counting subtheme-content ∪ group-content.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use quiver_core::criteria::SelectionCriteria;
use quiver_core::errors::StoreResult;
use quiver_core::ids::{GroupId, SubthemeId, TenantId, ThemeId};
use quiver_core::taxonomy::ParentIndex;
use quiver_core::traits::ITaxonomyStore;

/// Request-scoped output of override resolution. Never persisted.
///
/// Invariant: a selected theme or subtheme lands in exactly one bucket —
/// fully included (the effective sets), or overridden and represented by
/// its complement (tracked through `groups_by_subtheme` /
/// `covering_subthemes_by_theme`).
#[derive(Debug, Clone, Default)]
pub struct EffectiveHierarchy {
    /// Selected themes not overridden by any selected subtheme or group.
    pub effective_themes: BTreeSet<ThemeId>,
    /// Selected subthemes not overridden by any selected group.
    pub effective_subthemes: BTreeSet<SubthemeId>,
    /// For each subtheme that has selected groups under it: those groups.
    pub groups_by_subtheme: BTreeMap<SubthemeId, BTreeSet<GroupId>>,
    /// For each theme: the subthemes through which it was overridden
    /// (selected subthemes, and parent subthemes of selected groups).
    pub covering_subthemes_by_theme: BTreeMap<ThemeId, BTreeSet<SubthemeId>>,
    /// The raw selections, kept for complement construction and
    /// record-level matching.
    pub selected_themes: BTreeSet<ThemeId>,
    pub selected_subthemes: BTreeSet<SubthemeId>,
    pub selected_groups: BTreeSet<GroupId>,
}

impl EffectiveHierarchy {
    /// True when the request carried no taxonomy filter at all.
    pub fn is_empty(&self) -> bool {
        self.selected_themes.is_empty()
            && self.selected_subthemes.is_empty()
            && self.selected_groups.is_empty()
    }
}

/// Resolve the selected ID sets into the effective hierarchy.
///
/// Parent lookups go through the caller-supplied `ParentIndex` when it has
/// the answer, and fall back to one taxonomy-store read per node otherwise
/// (deduplicated per parent ID within the request). A parent that cannot be
/// found is treated as "no override" — degraded, logged, but never an
/// error.
pub fn resolve(
    tenant: &TenantId,
    criteria: &SelectionCriteria,
    parent_index: Option<&ParentIndex>,
    taxonomy: &dyn ITaxonomyStore,
) -> StoreResult<EffectiveHierarchy> {
    let mut overridden_themes: BTreeSet<ThemeId> = BTreeSet::new();
    let mut overridden_subthemes: BTreeSet<SubthemeId> = BTreeSet::new();
    let mut groups_by_subtheme: BTreeMap<SubthemeId, BTreeSet<GroupId>> = BTreeMap::new();
    let mut covering: BTreeMap<ThemeId, BTreeSet<SubthemeId>> = BTreeMap::new();
    // Dedup cache for storage-path subtheme→theme lookups.
    let mut subtheme_parent_cache: BTreeMap<SubthemeId, Option<ThemeId>> = BTreeMap::new();

    // Pass 1: every selected group overrides its parent subtheme and
    // grandparent theme.
    for group in &criteria.groups {
        // The parent index answers both levels in one lookup; the storage
        // path reads the group record and then resolves its subtheme's
        // parent through the per-request cache.
        let (subtheme, known_theme) = match parent_index.and_then(|pi| pi.group_parents(group)) {
            Some((subtheme, theme)) => (Some(subtheme.clone()), Some(theme.clone())),
            None => match taxonomy.group(tenant, group)? {
                Some(record) => (Some(record.subtheme), None),
                None => (None, None),
            },
        };
        let Some(subtheme) = subtheme else {
            warn!(%tenant, %group, "selected group has no resolvable parent; treating as non-overriding");
            continue;
        };

        groups_by_subtheme
            .entry(subtheme.clone())
            .or_default()
            .insert(group.clone());
        overridden_subthemes.insert(subtheme.clone());

        let theme = match known_theme {
            Some(theme) => Some(theme),
            None => subtheme_parent(
                tenant,
                &subtheme,
                parent_index,
                taxonomy,
                &mut subtheme_parent_cache,
            )?,
        };
        match theme {
            Some(theme) => {
                covering.entry(theme.clone()).or_default().insert(subtheme);
                overridden_themes.insert(theme);
            }
            None => {
                warn!(%tenant, %subtheme, "subtheme has no resolvable parent theme; theme not overridden");
            }
        }
    }

    // Pass 2: every selected subtheme overrides its parent theme.
    for subtheme in &criteria.subthemes {
        match subtheme_parent(
            tenant,
            subtheme,
            parent_index,
            taxonomy,
            &mut subtheme_parent_cache,
        )? {
            Some(theme) => {
                covering
                    .entry(theme.clone())
                    .or_default()
                    .insert(subtheme.clone());
                overridden_themes.insert(theme);
            }
            None => {
                warn!(%tenant, %subtheme, "selected subtheme has no resolvable parent theme; treating as non-overriding");
            }
        }
    }

    Ok(EffectiveHierarchy {
        effective_themes: criteria
            .themes
            .difference(&overridden_themes)
            .cloned()
            .collect(),
        effective_subthemes: criteria
            .subthemes
            .difference(&overridden_subthemes)
            .cloned()
            .collect(),
        groups_by_subtheme,
        covering_subthemes_by_theme: covering,
        selected_themes: criteria.themes.clone(),
        selected_subthemes: criteria.subthemes.clone(),
        selected_groups: criteria.groups.clone(),
    })
}

fn subtheme_parent(
    tenant: &TenantId,
    subtheme: &SubthemeId,
    parent_index: Option<&ParentIndex>,
    taxonomy: &dyn ITaxonomyStore,
    cache: &mut BTreeMap<SubthemeId, Option<ThemeId>>,
) -> StoreResult<Option<ThemeId>> {
    if let Some(theme) = parent_index.and_then(|pi| pi.subtheme_parent(subtheme)) {
        return Ok(Some(theme.clone()));
    }
    if let Some(cached) = cache.get(subtheme) {
        return Ok(cached.clone());
    }
    let theme = taxonomy
        .subtheme(tenant, subtheme)?
        .map(|record| record.theme);
    cache.insert(subtheme.clone(), theme.clone());
    Ok(theme)
}

/// Record-level taxonomy match, evaluated in strict precedence order and
/// short-circuiting on the first hit:
///
/// 1. the record's group is selected;
/// 2. the record's subtheme is effective (selected, not overridden);
/// 3. subtheme-complement: the record's subtheme was selected *and* has
///    group overrides, and the record is outside those groups;
/// 4. the record's theme is effective.
///
/// Steps 2 and 3 must stay in this order: swapping them would admit
/// complement records through the wrong branch or drop them entirely.
pub fn check_hierarchy_match(
    theme: &ThemeId,
    subtheme: Option<&SubthemeId>,
    group: Option<&GroupId>,
    hierarchy: &EffectiveHierarchy,
) -> bool {
    if let Some(group) = group {
        if hierarchy.selected_groups.contains(group) {
            return true;
        }
    }

    if let Some(subtheme) = subtheme {
        if hierarchy.effective_subthemes.contains(subtheme) {
            return true;
        }
        if hierarchy.selected_subthemes.contains(subtheme) {
            if let Some(overriding) = hierarchy.groups_by_subtheme.get(subtheme) {
                match group {
                    None => return true,
                    Some(group) if !overriding.contains(group) => return true,
                    Some(_) => {}
                }
            }
        }
    }

    hierarchy.effective_themes.contains(theme)
}
