//! Update records authored for a single level transition

use crate::error::ModelError;
use crate::ids::{AlertLevelId, UpdateId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One item of a rich-content field: field name to value
pub type ContentItem = BTreeMap<String, serde_json::Value>;

/// Language identifier used to pick a translated content variant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LangCode(String);

impl LangCode {
    /// Create a language code, trimming surrounding whitespace
    pub fn new(code: impl AsRef<str>) -> Result<Self, ModelError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(ModelError::EmptyLangCode);
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LangCode {
    type Error = ModelError;

    /// Stored codes must already be trimmed so distinct keys stay distinct
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim() != value {
            return Err(ModelError::UntrimmedLangCode(value));
        }
        Self::new(value)
    }
}

impl From<LangCode> for String {
    fn from(code: LangCode) -> Self {
        code.0
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content authored for one (from_level, to_level) transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub id: UpdateId,
    /// Level the region is leaving
    pub from_level: AlertLevelId,
    /// Level the region is entering
    pub to_level: AlertLevelId,
    /// Base content, a multi-value field
    #[serde(default)]
    pub content: Vec<ContentItem>,
    /// Per-locale content overrides
    #[serde(default)]
    pub translations: BTreeMap<LangCode, Vec<ContentItem>>,
}

impl UpdateRecord {
    /// Create an update with no content
    pub fn new(
        id: impl Into<UpdateId>,
        from_level: impl Into<AlertLevelId>,
        to_level: impl Into<AlertLevelId>,
    ) -> Self {
        Self {
            id: id.into(),
            from_level: from_level.into(),
            to_level: to_level.into(),
            content: Vec::new(),
            translations: BTreeMap::new(),
        }
    }

    /// Append a base content item
    pub fn with_content(mut self, item: ContentItem) -> Self {
        self.content.push(item);
        self
    }

    /// Append a content item to the given locale's translation
    pub fn with_translation(mut self, locale: LangCode, item: ContentItem) -> Self {
        self.translations.entry(locale).or_default().push(item);
        self
    }

    /// Whether a translation exists for `locale`
    pub fn has_translation(&self, locale: &LangCode) -> bool {
        self.translations.contains_key(locale)
    }

    /// Content for `locale`, falling back to the base content
    pub fn content_for(&self, locale: &LangCode) -> &[ContentItem] {
        match self.translations.get(locale) {
            Some(translated) => translated,
            None => &self.content,
        }
    }

    /// Whether this update was authored for the `from -> to` transition
    pub fn is_transition(&self, from: AlertLevelId, to: AlertLevelId) -> bool {
        self.from_level == from && self.to_level == to
    }
}
