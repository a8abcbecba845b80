//! Memoized situation update field
//!
//! The value is computed on first read and kept for as long as the field
//! owns the same node. Reloading a node means building a new field or
//! calling [`SituationUpdateField::replace_node`].

use crate::error::ResolveError;
use crate::resolver::AlertLevelResolver;
use crate::store::{RegionStore, UpdateSource};
use situation_model::{LangCode, ResolvedUpdate, SituationNode};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Computed update field of one node, bound to one locale
pub struct SituationUpdateField {
    node: SituationNode,
    locale: LangCode,
    value: OnceLock<Option<ResolvedUpdate>>,
}

impl SituationUpdateField {
    pub fn new(node: SituationNode, locale: LangCode) -> Self {
        Self {
            node,
            locale,
            value: OnceLock::new(),
        }
    }

    /// Whether a value is cached
    pub fn is_computed(&self) -> bool {
        self.value.get().is_some()
    }

    /// Read the field, computing it on first access
    ///
    /// Store faults are returned and leave the field uncomputed.
    pub fn get<S>(
        &self,
        store: &S,
        resolver: &AlertLevelResolver,
    ) -> Result<Option<&ResolvedUpdate>, ResolveError>
    where
        S: RegionStore + UpdateSource + ?Sized,
    {
        if let Some(value) = self.value.get() {
            return Ok(value.as_ref());
        }
        let computed = self.compute(store, resolver)?;
        Ok(self.value.get_or_init(|| computed).as_ref())
    }

    /// Drop the cached value
    pub fn invalidate(&mut self) {
        if self.value.take().is_some() {
            debug!("Invalidated update field of node {}", self.node.id);
        }
    }

    /// Swap in a reloaded node and drop the cached value
    pub fn replace_node(&mut self, node: SituationNode) {
        self.node = node;
        self.invalidate();
    }

    fn compute<S>(
        &self,
        store: &S,
        resolver: &AlertLevelResolver,
    ) -> Result<Option<ResolvedUpdate>, ResolveError>
    where
        S: RegionStore + UpdateSource + ?Sized,
    {
        if !resolver.applies_to(&self.node) {
            debug!(
                "Node {} has bundle {:?}, not {:?}",
                self.node.id,
                self.node.bundle,
                resolver.config().situation_bundle
            );
            return Ok(None);
        }

        let Some(region_id) = self.node.region else {
            debug!("Node {} has no region", self.node.id);
            return Ok(None);
        };
        let Some(region) = store.region(region_id)? else {
            warn!("Node {} references missing region {}", self.node.id, region_id);
            return Ok(None);
        };

        let candidates = store.updates(&self.node.updates)?;
        if candidates.len() < self.node.updates.len() {
            warn!(
                "Node {} references {} missing updates",
                self.node.id,
                self.node.updates.len() - candidates.len()
            );
        }

        resolver.resolve(store, &region, &candidates, &self.locale)
    }
}
