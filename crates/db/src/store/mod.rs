//! The key-value store collaborator.
//!
//! [`CatalogStore`] is the seam between the repository and whatever engine
//! holds the records. An engine guarantees:
//!
//! - a `put` or a multi-key `delete` is atomic;
//! - `list` returns items in key-path order, each item once;
//! - a committed transaction becomes visible all at once.
//!
//! `scan` makes no ordering promise.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::StoreResult;
use crate::key_path::KeyPath;
use crate::models::item::{Item, ItemType, StoredItem};

/// Maximum number of key paths accepted by a single [`CatalogStore::delete`].
pub const MAX_DELETE_BATCH: usize = 50;

/// Stream of items produced by scans and lists.
pub type ItemStream = BoxStream<'static, StoreResult<StoredItem>>;

/// Shared handle to a store, injected into repositories at construction.
pub type StoreHandle = Arc<dyn CatalogStore>;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Point lookup. Returns `None` when nothing lives at `key_path` or the
    /// item there is not of `item_type`.
    async fn get(&self, item_type: ItemType, key_path: &KeyPath) -> StoreResult<Option<StoredItem>>;

    /// Write `item` under all of its key paths, replacing any previous
    /// version. The returned copy carries the store's metadata.
    async fn put(&self, item: Item) -> StoreResult<StoredItem>;

    /// Remove the items at `key_paths`, atomically. Any alias of an item
    /// removes the whole item. Missing paths are ignored. Fails with
    /// [`StoreError::BatchTooLarge`](crate::StoreError::BatchTooLarge) above
    /// [`MAX_DELETE_BATCH`] paths.
    async fn delete(&self, key_paths: &[KeyPath]) -> StoreResult<()>;

    /// Every item of the given kinds, in no particular order.
    async fn scan(&self, item_types: &[ItemType]) -> StoreResult<ItemStream>;

    /// Every item with an alias under `prefix`, in key-path order.
    async fn list(&self, prefix: &KeyPath) -> StoreResult<ItemStream>;

    /// Open a transaction. Writes are buffered until
    /// [`StoreTransaction::commit`]; dropping the handle discards them.
    async fn begin(&self) -> StoreResult<Box<dyn StoreTransaction>>;

    async fn health_check(&self) -> StoreResult<()>;
}

#[async_trait]
pub trait StoreTransaction: Send {
    async fn put(&mut self, item: Item) -> StoreResult<()>;

    async fn put_batch(&mut self, items: Vec<Item>) -> StoreResult<()> {
        for item in items {
            self.put(item).await?;
        }
        Ok(())
    }

    async fn delete(&mut self, key_paths: &[KeyPath]) -> StoreResult<()>;

    /// Apply every buffered write in order, as one atomic step. Further use
    /// of the transaction fails with
    /// [`StoreError::TransactionClosed`](crate::StoreError::TransactionClosed).
    async fn commit(&mut self) -> StoreResult<()>;
}
