//! Per-request selection criteria and the four selection modes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, SubthemeId, ThemeId};

/// Which slice of the bank a request draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Every question matching the taxonomy filter.
    All,
    /// Only questions the user has never answered.
    Unanswered,
    /// Only questions the user answered incorrectly on the most recent attempt.
    Incorrect,
    /// Only questions the user has bookmarked.
    Bookmarked,
}

impl SelectionMode {
    /// `Unanswered`, `Incorrect`, and `Bookmarked` restrict the pool by user
    /// state even when no taxonomy filter is supplied, so an empty result in
    /// those modes is always classified as filtered-to-empty.
    pub fn is_inherently_filtering(&self) -> bool {
        !matches!(self, SelectionMode::All)
    }
}

/// Immutable taxonomy filter for one selection request.
///
/// All three sets are optional; an empty criteria means "the whole bank".
/// Ordered sets keep every downstream traversal deterministic under a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    pub themes: BTreeSet<ThemeId>,
    pub subthemes: BTreeSet<SubthemeId>,
    pub groups: BTreeSet<GroupId>,
}

impl SelectionCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty() && self.subthemes.is_empty() && self.groups.is_empty()
    }

    pub fn with_theme(mut self, theme: impl Into<ThemeId>) -> Self {
        self.themes.insert(theme.into());
        self
    }

    pub fn with_subtheme(mut self, subtheme: impl Into<SubthemeId>) -> Self {
        self.subthemes.insert(subtheme.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<GroupId>) -> Self {
        self.groups.insert(group.into());
        self
    }
}
