//! Situation Domain Model
//!
//! Typed, read-only entities consumed by the situation update resolver:
//! alert levels, regions and their validity windows, update records with
//! their translations, situation nodes, and the resolved update value.

mod error;
mod ids;
mod level;
mod node;
mod region;
mod resolved;
mod update;

pub use error::ModelError;
pub use ids::{AlertLevelId, NodeId, RegionId, UpdateId, ValidityWindowId};
pub use level::AlertLevel;
pub use node::SituationNode;
pub use region::{Region, ValidityWindow};
pub use resolved::{ResolvedUpdate, LEVEL_KEY, VALID_FROM_KEY, VALID_TO_KEY};
pub use update::{ContentItem, LangCode, UpdateRecord};
