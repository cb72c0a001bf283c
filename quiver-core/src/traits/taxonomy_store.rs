use crate::errors::StoreResult;
use crate::ids::{GroupId, SubthemeId, TenantId};
use crate::taxonomy::{Group, Subtheme};

/// Parent lookups for override resolution.
///
/// Only consulted when the caller did not supply a precomputed
/// `ParentIndex`. A missing record is `Ok(None)`, which the resolver treats
/// as "no override" rather than an error.
pub trait ITaxonomyStore: Send + Sync {
    fn subtheme(&self, tenant: &TenantId, id: &SubthemeId) -> StoreResult<Option<Subtheme>>;

    fn group(&self, tenant: &TenantId, id: &GroupId) -> StoreResult<Option<Group>>;
}
