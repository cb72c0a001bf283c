//! SelectionEngine: the orchestrator and only public entry point.
//!
//! Validates and clamps the requested count, resolves the taxonomy filter
//! once, dispatches the mode's strategy, downsamples with the sampling
//! kernel, and classifies empty results.

use tracing::{debug, info};

use quiver_core::config::SelectionConfig;
use quiver_core::criteria::{SelectionCriteria, SelectionMode};
use quiver_core::errors::{SelectionError, SelectionResult};
use quiver_core::ids::{QuestionId, TenantId, UserId};
use quiver_core::taxonomy::ParentIndex;
use quiver_core::traits::{IOrderIndex, IQuestionRepository, ITaxonomyStore, IUserStateStore};
use quiver_sampling::{sample, SelectionRng};

use crate::resolver;
use crate::strategies::{self, StrategyCtx};

/// One selection request. Criteria and parent maps are immutable,
/// request-scoped values; the optional seed makes the whole request
/// reproducible.
#[derive(Debug, Clone)]
pub struct SelectionRequest<'a> {
    pub tenant: TenantId,
    pub user: UserId,
    pub mode: SelectionMode,
    pub criteria: SelectionCriteria,
    pub max_questions: usize,
    pub seed: Option<&'a str>,
    pub parent_index: Option<&'a ParentIndex>,
}

/// The selection engine. Stateless between requests: every read goes to
/// the injected stores, so instances are cheap and freely shareable.
pub struct SelectionEngine<'a> {
    repo: &'a dyn IQuestionRepository,
    taxonomy: &'a dyn ITaxonomyStore,
    user_state: &'a dyn IUserStateStore,
    index: &'a dyn IOrderIndex,
    config: SelectionConfig,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(
        repo: &'a dyn IQuestionRepository,
        taxonomy: &'a dyn ITaxonomyStore,
        user_state: &'a dyn IUserStateStore,
        index: &'a dyn IOrderIndex,
    ) -> Self {
        Self {
            repo,
            taxonomy,
            user_state,
            index,
            config: SelectionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SelectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Select up to `max_questions` distinct question IDs for the request.
    ///
    /// An empty outcome is an explicit variant, never an empty `Ok`:
    /// `EmptyNoFilter` when an unfiltered mode-"all" request found a bare
    /// bank, `EmptyWithFilter` for every other empty case.
    pub fn select(&self, request: &SelectionRequest<'_>) -> SelectionResult<Vec<QuestionId>> {
        // A misconfigured ceiling of 0 must not turn the clamp into a panic;
        // the engine always answers with at least one question.
        let ceiling = self.config.max_questions.max(1);
        let count = request.max_questions.clamp(1, ceiling);
        let mut rng = SelectionRng::from_seed(request.seed);

        debug!(
            tenant = %request.tenant,
            user = %request.user,
            mode = ?request.mode,
            requested = request.max_questions,
            clamped = count,
            seeded = request.seed.is_some(),
            "dispatching selection"
        );

        let hierarchy = resolver::resolve(
            &request.tenant,
            &request.criteria,
            request.parent_index,
            self.taxonomy,
        )?;

        let ctx = StrategyCtx {
            repo: self.repo,
            user_state: self.user_state,
            index: self.index,
            config: &self.config,
            tenant: &request.tenant,
            user: &request.user,
        };

        let pool = match request.mode {
            SelectionMode::All => strategies::all::gather(&ctx, &hierarchy, count, &rng)?,
            SelectionMode::Unanswered => strategies::unanswered::gather(&ctx, &hierarchy, count)?,
            SelectionMode::Incorrect => strategies::incorrect::gather(&ctx, &hierarchy)?,
            SelectionMode::Bookmarked => strategies::bookmarked::gather(&ctx, &hierarchy)?,
        };

        if pool.is_empty() {
            let filtered =
                !request.criteria.is_empty() || request.mode.is_inherently_filtering();
            info!(
                tenant = %request.tenant,
                mode = ?request.mode,
                filtered,
                "selection yielded no candidates"
            );
            return Err(if filtered {
                SelectionError::EmptyWithFilter
            } else {
                SelectionError::EmptyNoFilter
            });
        }

        let ids = sample(pool, count, &mut rng);
        debug!(returned = ids.len(), "selection complete");
        Ok(ids)
    }
}
