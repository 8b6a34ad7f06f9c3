//! Catalog persistence layer.
//!
//! Models channels, shows and characters on top of a hierarchical key-value
//! store: key-path addressing, cascade deletes bottom-up, flat scans by kind
//! and prefix-bounded hierarchical listing.

pub mod error;
pub mod key_path;
pub mod mapper;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

mod seed_data;

pub use error::{StoreError, StoreResult};
pub use seed::{SeedOutcome, Seeder};
pub use store::memory::MemoryStore;
pub use store::{CatalogStore, StoreHandle};

/// Verify the store answers requests.
pub async fn health_check(store: &dyn CatalogStore) -> StoreResult<()> {
    store.health_check().await
}
