//! Content Store
//!
//! In-memory entity store implementing the resolver's read interfaces,
//! loadable from a JSON snapshot.

mod repository;
mod snapshot;

pub use repository::InMemoryStore;
pub use snapshot::ContentSnapshot;
pub use situation_resolver::StoreError;
