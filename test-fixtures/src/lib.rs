//! In-memory implementations of the engine's store traits, plus a builder
//! for seeding a tenant's bank (taxonomy, questions, user state) while
//! keeping the aggregate index in sync through the write-side triggers.
//!
//! `BTreeMap`-backed so every scan returns records in a stable order —
//! integration tests rely on that for seeded determinism.

use std::collections::BTreeMap;

use quiver_core::errors::StoreResult;
use quiver_core::ids::{GroupId, QuestionId, SubthemeId, TenantId, ThemeId, UserId};
use quiver_core::taxonomy::{Group, ParentIndex, Question, Subtheme};
use quiver_core::traits::{IQuestionRepository, ITaxonomyStore, IUserStateStore};
use quiver_core::user_state::{AnswerState, Bookmark, TaxonomyRef};
use quiver_index::AggregateIndex;

/// A complete in-memory bank: question repository, taxonomy store,
/// user-state store, and the aggregate index, all kept consistent by the
/// builder methods.
#[derive(Default)]
pub struct FixtureBank {
    pub index: AggregateIndex,
    questions: BTreeMap<(TenantId, QuestionId), Question>,
    subthemes: BTreeMap<(TenantId, SubthemeId), Subtheme>,
    groups: BTreeMap<(TenantId, GroupId), Group>,
    answers: BTreeMap<(TenantId, UserId, QuestionId), AnswerState>,
    bookmarks: BTreeMap<(TenantId, UserId, QuestionId), Bookmark>,
}

impl FixtureBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_subtheme(
        &mut self,
        tenant: impl Into<TenantId>,
        id: impl Into<SubthemeId>,
        theme: impl Into<ThemeId>,
    ) {
        let tenant = tenant.into();
        let id = id.into();
        self.subthemes.insert(
            (tenant.clone(), id.clone()),
            Subtheme {
                id: id.clone(),
                tenant,
                theme: theme.into(),
                name: id.to_string(),
            },
        );
    }

    pub fn add_group(
        &mut self,
        tenant: impl Into<TenantId>,
        id: impl Into<GroupId>,
        subtheme: impl Into<SubthemeId>,
    ) {
        let tenant = tenant.into();
        let id = id.into();
        self.groups.insert(
            (tenant.clone(), id.clone()),
            Group {
                id: id.clone(),
                tenant,
                subtheme: subtheme.into(),
                name: id.to_string(),
            },
        );
    }

    /// Insert a question with a fresh ID and fire the index trigger.
    pub fn add_question(
        &mut self,
        tenant: impl Into<TenantId>,
        theme: impl Into<ThemeId>,
        subtheme: Option<&str>,
        group: Option<&str>,
    ) -> QuestionId {
        let tenant = tenant.into();
        let id = QuestionId::from(uuid::Uuid::new_v4().to_string());
        let question = Question {
            id: id.clone(),
            tenant: tenant.clone(),
            theme: theme.into(),
            subtheme: subtheme.map(SubthemeId::from),
            group: group.map(GroupId::from),
            prompt: format!("prompt {id}"),
            created_at: chrono::Utc::now(),
        };
        self.index.question_inserted(&question);
        self.questions.insert((tenant, id.clone()), question);
        id
    }

    /// Delete a question and fire the index trigger.
    pub fn remove_question(&mut self, tenant: impl Into<TenantId>, id: &QuestionId) {
        let tenant = tenant.into();
        if let Some(question) = self.questions.remove(&(tenant, id.clone())) {
            self.index.question_removed(&question);
        }
    }

    /// Upsert the answer state for (tenant, user, question): first answer
    /// creates the record, later answers overwrite `is_incorrect`.
    pub fn record_answer(
        &mut self,
        tenant: impl Into<TenantId>,
        user: impl Into<UserId>,
        question: &QuestionId,
        correct: bool,
    ) {
        let tenant = tenant.into();
        let user = user.into();
        let taxonomy = self.taxonomy_of(&tenant, question);
        self.answers.insert(
            (tenant.clone(), user.clone(), question.clone()),
            AnswerState {
                tenant,
                user,
                question: question.clone(),
                has_answered: true,
                is_incorrect: !correct,
                taxonomy,
                answered_at: chrono::Utc::now(),
            },
        );
    }

    pub fn add_bookmark(
        &mut self,
        tenant: impl Into<TenantId>,
        user: impl Into<UserId>,
        question: &QuestionId,
    ) {
        let tenant = tenant.into();
        let user = user.into();
        let taxonomy = self.taxonomy_of(&tenant, question);
        self.bookmarks.insert(
            (tenant.clone(), user.clone(), question.clone()),
            Bookmark {
                tenant,
                user,
                question: question.clone(),
                taxonomy,
                created_at: chrono::Utc::now(),
            },
        );
    }

    /// Strip the denormalized taxonomy from every user-state record,
    /// forcing the engine down its per-record question-read fallback.
    pub fn strip_denormalized_taxonomy(&mut self) {
        for answer in self.answers.values_mut() {
            answer.taxonomy = None;
        }
        for bookmark in self.bookmarks.values_mut() {
            bookmark.taxonomy = None;
        }
    }

    /// Precomputed parent maps for one tenant, as a caller that holds the
    /// taxonomy in memory would supply them.
    pub fn parent_index(&self, tenant: impl Into<TenantId>) -> ParentIndex {
        let tenant = tenant.into();
        let subthemes: Vec<Subtheme> = self
            .subthemes
            .values()
            .filter(|s| s.tenant == tenant)
            .cloned()
            .collect();
        let groups: Vec<Group> = self
            .groups
            .values()
            .filter(|g| g.tenant == tenant)
            .cloned()
            .collect();
        ParentIndex::from_nodes(&subthemes, &groups)
    }

    fn taxonomy_of(&self, tenant: &TenantId, question: &QuestionId) -> Option<TaxonomyRef> {
        self.questions
            .get(&(tenant.clone(), question.clone()))
            .map(|q| TaxonomyRef {
                theme: q.theme.clone(),
                subtheme: q.subtheme.clone(),
                group: q.group.clone(),
            })
    }
}

impl IQuestionRepository for FixtureBank {
    fn get(&self, tenant: &TenantId, id: &QuestionId) -> StoreResult<Option<Question>> {
        Ok(self.questions.get(&(tenant.clone(), id.clone())).cloned())
    }

    fn by_tenant_and_theme(
        &self,
        tenant: &TenantId,
        theme: &ThemeId,
        cap: usize,
    ) -> StoreResult<Vec<Question>> {
        Ok(self
            .questions
            .values()
            .filter(|q| &q.tenant == tenant && &q.theme == theme)
            .take(cap)
            .cloned()
            .collect())
    }

    fn by_tenant_and_subtheme(
        &self,
        tenant: &TenantId,
        subtheme: &SubthemeId,
        cap: usize,
    ) -> StoreResult<Vec<Question>> {
        Ok(self
            .questions
            .values()
            .filter(|q| &q.tenant == tenant && q.subtheme.as_ref() == Some(subtheme))
            .take(cap)
            .cloned()
            .collect())
    }

    fn by_tenant_and_group(
        &self,
        tenant: &TenantId,
        group: &GroupId,
        cap: usize,
    ) -> StoreResult<Vec<Question>> {
        Ok(self
            .questions
            .values()
            .filter(|q| &q.tenant == tenant && q.group.as_ref() == Some(group))
            .take(cap)
            .cloned()
            .collect())
    }
}

impl ITaxonomyStore for FixtureBank {
    fn subtheme(&self, tenant: &TenantId, id: &SubthemeId) -> StoreResult<Option<Subtheme>> {
        Ok(self.subthemes.get(&(tenant.clone(), id.clone())).cloned())
    }

    fn group(&self, tenant: &TenantId, id: &GroupId) -> StoreResult<Option<Group>> {
        Ok(self.groups.get(&(tenant.clone(), id.clone())).cloned())
    }
}

impl IUserStateStore for FixtureBank {
    fn answered_question_ids(
        &self,
        tenant: &TenantId,
        user: &UserId,
    ) -> StoreResult<Vec<QuestionId>> {
        Ok(self
            .answers
            .values()
            .filter(|a| &a.tenant == tenant && &a.user == user && a.has_answered)
            .map(|a| a.question.clone())
            .collect())
    }

    fn incorrect_states(
        &self,
        tenant: &TenantId,
        user: &UserId,
    ) -> StoreResult<Vec<AnswerState>> {
        Ok(self
            .answers
            .values()
            .filter(|a| &a.tenant == tenant && &a.user == user && a.is_incorrect)
            .cloned()
            .collect())
    }

    fn bookmarks(&self, tenant: &TenantId, user: &UserId) -> StoreResult<Vec<Bookmark>> {
        Ok(self
            .bookmarks
            .values()
            .filter(|b| &b.tenant == tenant && &b.user == user)
            .cloned()
            .collect())
    }
}
