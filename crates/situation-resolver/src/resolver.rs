//! Alert Level Resolver Implementation

use crate::error::ResolveError;
use crate::settings::ResolverConfig;
use crate::store::RegionStore;
use situation_model::{
    AlertLevel, ContentItem, LangCode, Region, ResolvedUpdate, SituationNode, UpdateRecord,
    ValidityWindow,
};
use tracing::{debug, info};

/// Why a region could not be resolved at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotApplicable {
    /// Region has no current alert level
    MissingCurrentLevel,
    /// Region has no next validity window
    MissingNextValidity,
    /// Window's level reference is unset or dangling
    UnresolvedNextLevel,
}

/// Outcome of a resolution, with the reason when nothing was found
///
/// [`Resolution::into_update`] collapses all non-matches into `None`. The
/// reason is informational.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    NotApplicable(NotApplicable),
    /// Region data was complete but no candidate covers the transition
    NoMatch,
    Matched(ResolvedUpdate),
}

impl Resolution {
    pub fn into_update(self) -> Option<ResolvedUpdate> {
        match self {
            Resolution::Matched(update) => Some(update),
            Resolution::NotApplicable(_) | Resolution::NoMatch => None,
        }
    }
}

/// Find the first candidate authored for `current -> next_level`
///
/// Candidates are scanned in order and the first structural match wins.
/// Its content is taken in `locale` when translated, and the first content
/// item is merged with the level label and window bounds.
pub fn match_transition(
    current: &AlertLevel,
    window: &ValidityWindow,
    next_level: &AlertLevel,
    candidates: &[UpdateRecord],
    locale: &LangCode,
) -> Option<ResolvedUpdate> {
    let update = candidates
        .iter()
        .find(|update| update.is_transition(current.id, next_level.id))?;

    let content = update
        .content_for(locale)
        .first()
        .cloned()
        .unwrap_or_else(ContentItem::new);

    debug!(
        "Update {} matches transition {} -> {} ({})",
        update.id,
        current.id,
        next_level.id,
        if update.has_translation(locale) { locale.as_str() } else { "base" }
    );

    Some(ResolvedUpdate {
        content,
        level: next_level.level_value.clone(),
        valid_from: window.valid_from(),
        valid_to: window.valid_to(),
    })
}

/// Resolves the situation update for a region
pub struct AlertLevelResolver {
    config: ResolverConfig,
}

impl AlertLevelResolver {
    /// Create a new resolver
    pub fn new(config: ResolverConfig) -> Self {
        info!("Creating alert level resolver with config: {:?}", config);
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether `node` carries the computed update field
    pub fn applies_to(&self, node: &SituationNode) -> bool {
        node.is_bundle(&self.config.situation_bundle)
    }

    /// Resolve the update for `region`, or `None` when there is nothing to show
    pub fn resolve<S: RegionStore + ?Sized>(
        &self,
        store: &S,
        region: &Region,
        candidates: &[UpdateRecord],
        locale: &LangCode,
    ) -> Result<Option<ResolvedUpdate>, ResolveError> {
        Ok(self
            .resolve_outcome(store, region, candidates, locale)?
            .into_update())
    }

    /// Resolve the update for `region`, keeping the reason for a miss
    pub fn resolve_outcome<S: RegionStore + ?Sized>(
        &self,
        store: &S,
        region: &Region,
        candidates: &[UpdateRecord],
        locale: &LangCode,
    ) -> Result<Resolution, ResolveError> {
        let Some(current) = store.current_level(region)? else {
            debug!("Region {} skipped: no current alert level", region.id);
            return Ok(Resolution::NotApplicable(NotApplicable::MissingCurrentLevel));
        };

        let Some(window) = store.next_validity(region)? else {
            debug!("Region {} skipped: no next validity window", region.id);
            return Ok(Resolution::NotApplicable(NotApplicable::MissingNextValidity));
        };

        let next_level = match window.next_level() {
            Some(id) => store.alert_level(id)?,
            None => None,
        };
        let Some(next_level) = next_level else {
            debug!(
                "Region {} skipped: window {} has no resolvable level",
                region.id,
                window.id()
            );
            return Ok(Resolution::NotApplicable(NotApplicable::UnresolvedNextLevel));
        };

        match match_transition(&current, &window, &next_level, candidates, locale) {
            Some(update) => {
                info!(
                    "Resolved update for region {}: {} -> {}",
                    region.id, current.level_value, next_level.level_value
                );
                Ok(Resolution::Matched(update))
            }
            None => {
                debug!(
                    "No update among {} candidates for region {} ({} -> {})",
                    candidates.len(),
                    region.id,
                    current.id,
                    next_level.id
                );
                Ok(Resolution::NoMatch)
            }
        }
    }
}

impl Default for AlertLevelResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
