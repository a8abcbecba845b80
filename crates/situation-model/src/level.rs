//! Alert level reference data

use crate::ids::AlertLevelId;
use serde::{Deserialize, Serialize};

/// A pandemic alert level, e.g. "orange" or "red"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertLevel {
    pub id: AlertLevelId,
    /// Label shown to readers. Two levels may share a label.
    pub level_value: String,
}

impl AlertLevel {
    pub fn new(id: impl Into<AlertLevelId>, level_value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level_value: level_value.into(),
        }
    }
}
