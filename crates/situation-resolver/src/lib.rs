//! Situation Update Resolver
//!
//! Picks the update record authored for a region's upcoming alert-level
//! transition and exposes it, with the transition's level and validity
//! dates, as the computed update field of a situation node.

mod error;
mod field;
mod resolver;
mod settings;
mod store;

pub use error::{ConfigError, ResolveError, StoreError};
pub use field::SituationUpdateField;
pub use resolver::{match_transition, AlertLevelResolver, NotApplicable, Resolution};
pub use settings::ResolverConfig;
pub use store::{FixedLocale, LocaleResolver, RegionStore, UpdateSource};
