//! Resolved update value exposed by the computed field

use crate::update::ContentItem;
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Key holding the next level's label
pub const LEVEL_KEY: &str = "level";
/// Key holding the window start date
pub const VALID_FROM_KEY: &str = "validFrom";
/// Key holding the window end date
pub const VALID_TO_KEY: &str = "validTo";

const COMPUTED_KEYS: [&str; 3] = [LEVEL_KEY, VALID_FROM_KEY, VALID_TO_KEY];

/// Matched update content together with the computed transition metadata
///
/// In the flattened form the computed keys always win over content entries
/// with the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUpdate {
    /// Content of the matched update, in the requested locale when available
    pub content: ContentItem,
    /// Label of the level the region is entering
    pub level: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

impl ResolvedUpdate {
    /// Content entries not shadowed by a computed key
    pub fn content_entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.content
            .iter()
            .filter(|(key, _)| !COMPUTED_KEYS.contains(&key.as_str()))
    }

}

impl Serialize for ResolvedUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.content_entries() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(LEVEL_KEY, &self.level)?;
        map.serialize_entry(VALID_FROM_KEY, &self.valid_from.to_string())?;
        map.serialize_entry(VALID_TO_KEY, &self.valid_to.to_string())?;
        map.end()
    }
}
