//! Taxonomy models: the strict three-level theme / subtheme / group tree,
//! questions filed under it, and the optional precomputed parent maps.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, QuestionId, SubthemeId, TenantId, ThemeId};

/// Top-level taxonomy node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub tenant: TenantId,
    pub name: String,
}

/// Middle taxonomy node. Has exactly one parent theme within the same tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtheme {
    pub id: SubthemeId,
    pub tenant: TenantId,
    pub theme: ThemeId,
    pub name: String,
}

/// Leaf taxonomy node. Has exactly one parent subtheme within the same tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub tenant: TenantId,
    pub subtheme: SubthemeId,
    pub name: String,
}

/// A question in the bank. Belongs to exactly one theme; the subtheme and
/// group assignments are optional but must be consistent with the tree
/// (the subtheme a child of the theme, the group a child of the subtheme).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub tenant: TenantId,
    pub theme: ThemeId,
    pub subtheme: Option<SubthemeId>,
    pub group: Option<GroupId>,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}

/// Precomputed parent maps for override resolution.
///
/// Callers that already hold the taxonomy in memory can pass this to the
/// engine so that resolving a group's parent subtheme and grandparent theme
/// costs O(1) instead of a storage read per node.
#[derive(Debug, Clone, Default)]
pub struct ParentIndex {
    group_parents: BTreeMap<GroupId, (SubthemeId, ThemeId)>,
    subtheme_parents: BTreeMap<SubthemeId, ThemeId>,
}

impl ParentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the maps from taxonomy nodes. Groups whose parent subtheme is
    /// not among `subthemes` are skipped; the resolver will fall back to a
    /// storage read for those (or treat them as non-overriding).
    pub fn from_nodes(subthemes: &[Subtheme], groups: &[Group]) -> Self {
        let mut index = Self::new();
        for s in subthemes {
            index.insert_subtheme(s.id.clone(), s.theme.clone());
        }
        for g in groups {
            if let Some(theme) = index.subtheme_parents.get(&g.subtheme).cloned() {
                index.insert_group(g.id.clone(), g.subtheme.clone(), theme);
            }
        }
        index
    }

    pub fn insert_subtheme(&mut self, subtheme: SubthemeId, theme: ThemeId) {
        self.subtheme_parents.insert(subtheme, theme);
    }

    pub fn insert_group(&mut self, group: GroupId, subtheme: SubthemeId, theme: ThemeId) {
        self.group_parents.insert(group, (subtheme, theme));
    }

    /// Parent subtheme and grandparent theme of a group, if known.
    pub fn group_parents(&self, group: &GroupId) -> Option<&(SubthemeId, ThemeId)> {
        self.group_parents.get(group)
    }

    /// Parent theme of a subtheme, if known.
    pub fn subtheme_parent(&self, subtheme: &SubthemeId) -> Option<&ThemeId> {
        self.subtheme_parents.get(subtheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_nodes_links_groups_through_subthemes() {
        let tenant = TenantId::from("t1");
        let subthemes = vec![Subtheme {
            id: SubthemeId::from("s1"),
            tenant: tenant.clone(),
            theme: ThemeId::from("th1"),
            name: "circulation".into(),
        }];
        let groups = vec![
            Group {
                id: GroupId::from("g1"),
                tenant: tenant.clone(),
                subtheme: SubthemeId::from("s1"),
                name: "arteries".into(),
            },
            // Parent subtheme not indexed: must be skipped, not linked wrongly.
            Group {
                id: GroupId::from("g2"),
                tenant,
                subtheme: SubthemeId::from("missing"),
                name: "orphan".into(),
            },
        ];

        let index = ParentIndex::from_nodes(&subthemes, &groups);
        let (s, t) = index.group_parents(&GroupId::from("g1")).unwrap();
        assert_eq!(s, &SubthemeId::from("s1"));
        assert_eq!(t, &ThemeId::from("th1"));
        assert!(index.group_parents(&GroupId::from("g2")).is_none());
    }
}
