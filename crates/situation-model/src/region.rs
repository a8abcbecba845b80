//! Regions and their scheduled validity windows

use crate::error::ModelError;
use crate::ids::{AlertLevelId, RegionId, ValidityWindowId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geographic region with its current alert level (PES)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    /// Presently active alert level
    #[serde(default)]
    pub current_level: Option<AlertLevelId>,
    /// Upcoming scheduled transition
    #[serde(default)]
    pub next_validity: Option<ValidityWindowId>,
}

impl Region {
    /// Create a region with no level data attached
    pub fn new(id: impl Into<RegionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_level: None,
            next_validity: None,
        }
    }

    /// Set the current alert level
    pub fn with_current_level(mut self, level: impl Into<AlertLevelId>) -> Self {
        self.current_level = Some(level.into());
        self
    }

    /// Set the next validity window
    pub fn with_next_validity(mut self, window: impl Into<ValidityWindowId>) -> Self {
        self.next_validity = Some(window.into());
        self
    }
}

/// Period during which a new alert level becomes active for a region
///
/// `valid_from <= valid_to` always holds, including for deserialized values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct ValidityWindow {
    id: ValidityWindowId,
    valid_from: NaiveDate,
    valid_to: NaiveDate,
    next_level: Option<AlertLevelId>,
}

#[derive(Deserialize)]
struct RawWindow {
    id: ValidityWindowId,
    valid_from: NaiveDate,
    valid_to: NaiveDate,
    #[serde(default)]
    next_level: Option<AlertLevelId>,
}

impl TryFrom<RawWindow> for ValidityWindow {
    type Error = ModelError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.valid_from, raw.valid_to, raw.next_level)
    }
}

impl ValidityWindow {
    /// Create a validity window, rejecting inverted bounds
    pub fn new(
        id: impl Into<ValidityWindowId>,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
        next_level: Option<AlertLevelId>,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        if valid_from > valid_to {
            return Err(ModelError::InvertedWindow {
                id: id.get(),
                from: valid_from,
                to: valid_to,
            });
        }
        Ok(Self {
            id,
            valid_from,
            valid_to,
            next_level,
        })
    }

    pub fn id(&self) -> ValidityWindowId {
        self.id
    }

    pub fn valid_from(&self) -> NaiveDate {
        self.valid_from
    }

    pub fn valid_to(&self) -> NaiveDate {
        self.valid_to
    }

    /// Alert level that becomes active, if the reference is set
    pub fn next_level(&self) -> Option<AlertLevelId> {
        self.next_level
    }
}
