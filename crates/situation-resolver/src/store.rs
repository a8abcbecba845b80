//! Read interfaces onto the external content store

use crate::error::StoreError;
use situation_model::{
    AlertLevel, AlertLevelId, LangCode, Region, RegionId, UpdateId, UpdateRecord, ValidityWindow,
};

/// Region alert-level lookups
pub trait RegionStore {
    /// Presently active level of `region`, if any
    fn current_level(&self, region: &Region) -> Result<Option<AlertLevel>, StoreError>;

    /// Upcoming scheduled transition of `region`, if any
    fn next_validity(&self, region: &Region) -> Result<Option<ValidityWindow>, StoreError>;

    /// Resolve an alert level reference
    fn alert_level(&self, id: AlertLevelId) -> Result<Option<AlertLevel>, StoreError>;
}

/// Lookups needed to compute a node's field
pub trait UpdateSource {
    fn region(&self, id: RegionId) -> Result<Option<Region>, StoreError>;

    /// Load updates in the order given, skipping ids that no longer exist
    fn updates(&self, ids: &[UpdateId]) -> Result<Vec<UpdateRecord>, StoreError>;
}

/// Supplies the locale of the current request
pub trait LocaleResolver {
    fn current_locale(&self) -> LangCode;
}

/// Locale fixed at construction
#[derive(Debug, Clone)]
pub struct FixedLocale(pub LangCode);

impl LocaleResolver for FixedLocale {
    fn current_locale(&self) -> LangCode {
        self.0.clone()
    }
}
