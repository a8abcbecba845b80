//! In-memory Store Implementation

use crate::snapshot::ContentSnapshot;
use situation_model::{
    AlertLevel, AlertLevelId, NodeId, Region, RegionId, SituationNode, UpdateId, UpdateRecord,
    ValidityWindow, ValidityWindowId,
};
use situation_resolver::{RegionStore, StoreError, UpdateSource};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, warn};

fn lock_error<T>(e: PoisonError<T>) -> StoreError {
    StoreError::Unavailable(format!("Lock error: {}", e))
}

/// Entity store held in memory
pub struct InMemoryStore {
    levels: RwLock<HashMap<AlertLevelId, AlertLevel>>,
    windows: RwLock<HashMap<ValidityWindowId, ValidityWindow>>,
    regions: RwLock<HashMap<RegionId, Region>>,
    updates: RwLock<HashMap<UpdateId, UpdateRecord>>,
    nodes: RwLock<HashMap<NodeId, SituationNode>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            levels: RwLock::new(HashMap::new()),
            windows: RwLock::new(HashMap::new()),
            regions: RwLock::new(HashMap::new()),
            updates: RwLock::new(HashMap::new()),
            nodes: RwLock::new(HashMap::new()),
        }
    }

    /// Build a store from a validated snapshot
    pub fn from_snapshot(snapshot: ContentSnapshot) -> Result<Self, StoreError> {
        snapshot.validate()?;
        let store = Self::new();
        for level in snapshot.levels {
            store.insert_level(level)?;
        }
        for window in snapshot.windows {
            store.insert_window(window)?;
        }
        for region in snapshot.regions {
            store.insert_region(region)?;
        }
        for update in snapshot.updates {
            store.insert_update(update)?;
        }
        for node in snapshot.nodes {
            store.insert_node(node)?;
        }
        info!(
            "Loaded snapshot: {} regions, {} updates, {} nodes",
            store.region_count(),
            store.update_count(),
            store.node_count()
        );
        Ok(store)
    }

    /// Read a JSON snapshot file into a new store
    pub fn load_snapshot(path: &Path) -> Result<Self, StoreError> {
        info!("Loading snapshot from {}", path.display());
        Self::from_snapshot(ContentSnapshot::read(path)?)
    }

    pub fn insert_level(&self, level: AlertLevel) -> Result<(), StoreError> {
        self.levels.write().map_err(lock_error)?.insert(level.id, level);
        Ok(())
    }

    pub fn insert_window(&self, window: ValidityWindow) -> Result<(), StoreError> {
        self.windows.write().map_err(lock_error)?.insert(window.id(), window);
        Ok(())
    }

    pub fn insert_region(&self, region: Region) -> Result<(), StoreError> {
        self.regions.write().map_err(lock_error)?.insert(region.id, region);
        Ok(())
    }

    pub fn insert_update(&self, update: UpdateRecord) -> Result<(), StoreError> {
        self.updates.write().map_err(lock_error)?.insert(update.id, update);
        Ok(())
    }

    /// Insert or replace a node
    pub fn insert_node(&self, node: SituationNode) -> Result<(), StoreError> {
        let replaced = self.nodes.write().map_err(lock_error)?.insert(node.id, node);
        if let Some(old) = replaced {
            debug!("Replaced node {}", old.id);
        }
        Ok(())
    }

    /// Load a node by id
    pub fn node(&self, id: NodeId) -> Result<Option<SituationNode>, StoreError> {
        Ok(self.nodes.read().map_err(lock_error)?.get(&id).cloned())
    }

    pub fn region_count(&self) -> usize {
        self.regions.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn update_count(&self) -> usize {
        self.updates.read().map(|u| u.len()).unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.read().map(|n| n.len()).unwrap_or(0)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionStore for InMemoryStore {
    fn current_level(&self, region: &Region) -> Result<Option<AlertLevel>, StoreError> {
        match region.current_level {
            Some(id) => self.alert_level(id),
            None => Ok(None),
        }
    }

    fn next_validity(&self, region: &Region) -> Result<Option<ValidityWindow>, StoreError> {
        let Some(id) = region.next_validity else {
            return Ok(None);
        };
        let window = self.windows.read().map_err(lock_error)?.get(&id).cloned();
        if window.is_none() {
            warn!("Region {} references missing window {}", region.id, id);
        }
        Ok(window)
    }

    fn alert_level(&self, id: AlertLevelId) -> Result<Option<AlertLevel>, StoreError> {
        Ok(self.levels.read().map_err(lock_error)?.get(&id).cloned())
    }
}

impl UpdateSource for InMemoryStore {
    fn region(&self, id: RegionId) -> Result<Option<Region>, StoreError> {
        Ok(self.regions.read().map_err(lock_error)?.get(&id).cloned())
    }

    fn updates(&self, ids: &[UpdateId]) -> Result<Vec<UpdateRecord>, StoreError> {
        let updates = self.updates.read().map_err(lock_error)?;
        Ok(ids.iter().filter_map(|id| updates.get(id).cloned()).collect())
    }
}
