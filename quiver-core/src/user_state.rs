//! Per-user answer state and bookmarks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, QuestionId, SubthemeId, TenantId, ThemeId, UserId};

/// Taxonomy placement denormalized onto a user-state record at the time it
/// was written. Lets the filter-first modes test hierarchy membership
/// without re-reading the question document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRef {
    pub theme: ThemeId,
    pub subtheme: Option<SubthemeId>,
    pub group: Option<GroupId>,
}

/// One record per (tenant, user, question). Created on the first answer
/// submission and overwritten — not appended — on each subsequent attempt,
/// so `is_incorrect` always reflects the most recent attempt only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerState {
    pub tenant: TenantId,
    pub user: UserId,
    pub question: QuestionId,
    pub has_answered: bool,
    pub is_incorrect: bool,
    pub taxonomy: Option<TaxonomyRef>,
    pub answered_at: DateTime<Utc>,
}

/// Existence is the signal: a bookmark record means the question is
/// bookmarked, deletion means it is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub tenant: TenantId,
    pub user: UserId,
    pub question: QuestionId,
    pub taxonomy: Option<TaxonomyRef>,
    pub created_at: DateTime<Utc>,
}
