//! Content nodes that own the computed update field

use crate::ids::{NodeId, RegionId, UpdateId};
use serde::{Deserialize, Serialize};

/// A content node; only situation nodes carry a resolved update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationNode {
    pub id: NodeId,
    /// Content type of the node
    pub bundle: String,
    #[serde(default)]
    pub region: Option<RegionId>,
    /// Referenced update records, in authored order
    #[serde(default)]
    pub updates: Vec<UpdateId>,
}

impl SituationNode {
    pub fn new(id: impl Into<NodeId>, bundle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bundle: bundle.into(),
            region: None,
            updates: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: impl Into<RegionId>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_updates<I, T>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<UpdateId>,
    {
        self.updates.extend(updates.into_iter().map(Into::into));
        self
    }

    pub fn is_bundle(&self, bundle: &str) -> bool {
        self.bundle == bundle
    }
}
