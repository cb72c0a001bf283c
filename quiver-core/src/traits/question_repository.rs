use crate::errors::StoreResult;
use crate::ids::{GroupId, QuestionId, SubthemeId, TenantId, ThemeId};
use crate::taxonomy::Question;

/// Point reads and indexed scans over the question collection.
///
/// The scans are backed by (tenant, node) indexes on the write side; they
/// never degrade to a full-table walk. `cap` bounds how many records a scan
/// may return so a wide node cannot blow the request timeout.
pub trait IQuestionRepository: Send + Sync {
    fn get(&self, tenant: &TenantId, id: &QuestionId) -> StoreResult<Option<Question>>;

    fn by_tenant_and_theme(
        &self,
        tenant: &TenantId,
        theme: &ThemeId,
        cap: usize,
    ) -> StoreResult<Vec<Question>>;

    fn by_tenant_and_subtheme(
        &self,
        tenant: &TenantId,
        subtheme: &SubthemeId,
        cap: usize,
    ) -> StoreResult<Vec<Question>>;

    fn by_tenant_and_group(
        &self,
        tenant: &TenantId,
        group: &GroupId,
        cap: usize,
    ) -> StoreResult<Vec<Question>>;
}
