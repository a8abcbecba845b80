//! JSON snapshot of store contents

use serde::{Deserialize, Serialize};
use situation_model::{AlertLevel, Region, SituationNode, UpdateRecord, ValidityWindow};
use situation_resolver::StoreError;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

/// All entities of a store, as exported from the CMS
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub levels: Vec<AlertLevel>,
    #[serde(default)]
    pub windows: Vec<ValidityWindow>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub updates: Vec<UpdateRecord>,
    #[serde(default)]
    pub nodes: Vec<SituationNode>,
}

impl ContentSnapshot {
    /// Parse a snapshot from JSON text
    ///
    /// Identifier uniqueness is checked when the snapshot is loaded into a store.
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a snapshot file
    pub fn read(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject duplicate identifiers within each entity kind
    pub fn validate(&self) -> Result<(), StoreError> {
        unique("level", self.levels.iter().map(|l| l.id))?;
        unique("window", self.windows.iter().map(|w| w.id()))?;
        unique("region", self.regions.iter().map(|r| r.id))?;
        unique("update", self.updates.iter().map(|u| u.id))?;
        unique("node", self.nodes.iter().map(|n| n.id))?;
        Ok(())
    }
}

fn unique<T, I>(kind: &str, ids: I) -> Result<(), StoreError>
where
    T: Eq + Hash + Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if let Some(dup) = seen.replace(id) {
            return Err(StoreError::InvalidSnapshot(format!(
                "duplicate {} id {}",
                kind, dup
            )));
        }
    }
    Ok(())
}
