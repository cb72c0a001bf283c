//! Named partitions of the order-statistics index.

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, SubthemeId, ThemeId};

/// A partition of the aggregate index. Every question belongs to the
/// `Global` scope of its tenant, its theme scope, and (when assigned)
/// its subtheme and group scopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Global,
    Theme(ThemeId),
    Subtheme(SubthemeId),
    Group(GroupId),
}

impl Scope {
    /// Stable textual key, used for per-scope RNG stream derivation and logging.
    pub fn key(&self) -> String {
        match self {
            Scope::Global => "global".to_string(),
            Scope::Theme(id) => format!("theme:{id}"),
            Scope::Subtheme(id) => format!("subtheme:{id}"),
            Scope::Group(id) => format!("group:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct_across_levels() {
        // The same raw ID at two levels must not collide into one scope key.
        let theme = Scope::Theme(ThemeId::from("x"));
        let group = Scope::Group(GroupId::from("x"));
        assert_ne!(theme.key(), group.key());
        assert_eq!(Scope::Global.key(), "global");
    }
}
