//! Shared fixtures for resolver integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::json;
use situation_model::{
    AlertLevel, AlertLevelId, ContentItem, LangCode, Region, RegionId, UpdateId, UpdateRecord,
    ValidityWindow, ValidityWindowId,
};
use situation_resolver::{RegionStore, StoreError, UpdateSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Store over plain maps that counts lookups
#[derive(Default)]
pub struct FixtureStore {
    pub levels: HashMap<AlertLevelId, AlertLevel>,
    pub windows: HashMap<ValidityWindowId, ValidityWindow>,
    pub regions: HashMap<RegionId, Region>,
    pub updates: HashMap<UpdateId, UpdateRecord>,
    pub lookups: AtomicUsize,
    pub offline: AtomicBool,
}

impl FixtureStore {
    fn touch(&self) -> Result<(), StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("fixture offline".to_string()));
        }
        Ok(())
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn add_update(&mut self, update: UpdateRecord) {
        self.updates.insert(update.id, update);
    }
}

impl RegionStore for FixtureStore {
    fn current_level(&self, region: &Region) -> Result<Option<AlertLevel>, StoreError> {
        self.touch()?;
        Ok(region.current_level.and_then(|id| self.levels.get(&id).cloned()))
    }

    fn next_validity(&self, region: &Region) -> Result<Option<ValidityWindow>, StoreError> {
        self.touch()?;
        Ok(region.next_validity.and_then(|id| self.windows.get(&id).cloned()))
    }

    fn alert_level(&self, id: AlertLevelId) -> Result<Option<AlertLevel>, StoreError> {
        self.touch()?;
        Ok(self.levels.get(&id).cloned())
    }
}

impl UpdateSource for FixtureStore {
    fn region(&self, id: RegionId) -> Result<Option<Region>, StoreError> {
        self.touch()?;
        Ok(self.regions.get(&id).cloned())
    }

    fn updates(&self, ids: &[UpdateId]) -> Result<Vec<UpdateRecord>, StoreError> {
        self.touch()?;
        Ok(ids.iter().filter_map(|id| self.updates.get(id).cloned()).collect())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn lang(code: &str) -> LangCode {
    LangCode::new(code).unwrap()
}

pub fn text(value: &str) -> ContentItem {
    ContentItem::from([("text".to_string(), json!(value))])
}

/// Levels yellow (1), orange (2), red (5); window 3 moves to red
/// 2021-03-01..2021-03-14; region 7 is currently orange.
pub fn orange_to_red() -> FixtureStore {
    let mut store = FixtureStore::default();
    for (id, label) in [(1, "yellow"), (2, "orange"), (5, "red")] {
        store.levels.insert(AlertLevelId(id), AlertLevel::new(id, label));
    }
    let window = ValidityWindow::new(
        3,
        date(2021, 3, 1),
        date(2021, 3, 14),
        Some(AlertLevelId(5)),
    )
    .unwrap();
    store.windows.insert(window.id(), window);
    store.regions.insert(
        RegionId(7),
        Region::new(7, "Nord").with_current_level(2).with_next_validity(3),
    );
    store
}

pub fn region(store: &FixtureStore) -> Region {
    store.regions[&RegionId(7)].clone()
}
