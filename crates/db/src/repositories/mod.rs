//! Repository layer over the catalog store.
//!
//! Each repository holds a [`StoreHandle`](crate::store::StoreHandle) passed
//! in at construction and is cheap to clone.

pub mod cascade;
pub mod channel_repo;
pub mod character_repo;
pub mod maintenance_repo;
pub mod show_repo;

pub use cascade::CascadeSummary;
pub use channel_repo::ChannelRepo;
pub use character_repo::CharacterRepo;
pub use maintenance_repo::{MaintenanceRepo, ResetSummary};
pub use show_repo::ShowRepo;

use futures::TryStreamExt;

use crate::error::StoreResult;
use crate::models::item::StoredItem;
use crate::store::ItemStream;

/// Drain a store stream, keeping the items `map` accepts.
pub(crate) async fn collect_mapped<T>(
    stream: ItemStream,
    map: fn(StoredItem) -> Option<T>,
) -> StoreResult<Vec<T>> {
    stream
        .try_filter_map(|stored| futures::future::ready(Ok(map(stored))))
        .try_collect()
        .await
}
