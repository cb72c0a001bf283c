//! Newtype identifiers for every entity the engine touches.
//!
//! All IDs are opaque strings scoped to a tenant. Wrapping them in distinct
//! types keeps a `GroupId` from ever being passed where a `SubthemeId` is
//! expected, which matters a lot in the override-resolution code.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

id_type!(
    /// Isolation boundary: all taxonomy, questions, and user state belong to one tenant.
    TenantId
);
id_type!(
    /// A user within a tenant.
    UserId
);
id_type!(
    /// Immutable identity of a question. Taxonomy assignment may change; the ID never does.
    QuestionId
);
id_type!(
    /// Top level of the taxonomy tree.
    ThemeId
);
id_type!(
    /// Middle level; always has exactly one parent theme.
    SubthemeId
);
id_type!(
    /// Leaf level; always has exactly one parent subtheme.
    GroupId
);
