//! Resolver Error Types
//!
//! A missing match is never an error; only collaborator faults end up here.

use thiserror::Error;

/// Faults raised by the external content store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store could not be reached or is in a broken state
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Loaded data violates an entity invariant
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from resolving a situation update
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors loading resolver configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
