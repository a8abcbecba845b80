//! Resolver configuration

use crate::error::ConfigError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use situation_model::LangCode;
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Resolver configuration
///
/// Environment overrides use the `SITUATION_` prefix followed by the field
/// name: `SITUATION_SITUATION_BUNDLE`, `SITUATION_DEFAULT_LOCALE` and
/// `SITUATION_LOG_LEVEL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Bundle of the nodes that carry the computed update field (default: "situation")
    pub situation_bundle: String,
    /// Locale used when the caller does not supply one (default: "en")
    pub default_locale: String,
    /// Maximum log level for the binary (default: "info")
    pub log_level: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            situation_bundle: "situation".to_string(),
            default_locale: "en".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Layer defaults, an optional file, then `SITUATION_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("situation_bundle", defaults.situation_bundle)?
            .set_default("default_locale", defaults.default_locale)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix("SITUATION"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.situation_bundle.trim().is_empty() {
            return Err(ConfigError::Invalid("situation_bundle is empty".to_string()));
        }
        self.locale()?;
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level {:?} is not one of {:?}",
                self.log_level, LOG_LEVELS
            )));
        }
        Ok(())
    }

    /// Default locale as a language code
    pub fn locale(&self) -> Result<LangCode, ConfigError> {
        LangCode::new(&self.default_locale)
            .map_err(|e| ConfigError::Invalid(format!("default_locale: {}", e)))
    }
}
