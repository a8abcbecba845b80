//! Stable entity identifiers
//!
//! Matching is always done on these, never on labels.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw numeric value
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of an alert level
    AlertLevelId
);
entity_id!(
    /// Identifier of a region
    RegionId
);
entity_id!(
    /// Identifier of a validity window
    ValidityWindowId
);
entity_id!(
    /// Identifier of an update record
    UpdateId
);
entity_id!(
    /// Identifier of a content node
    NodeId
);
