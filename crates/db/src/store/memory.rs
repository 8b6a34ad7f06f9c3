//! In-process store engine.
//!
//! One canonical record per item, keyed by its primary (flat) key path, plus
//! an ordered alias index from every key path to that primary. The whole
//! state sits behind a single `RwLock`: writes take it once per call, reads
//! copy out a snapshot and stream it after releasing the lock.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::key_path::KeyPath;
use crate::models::item::{Item, ItemType, Metadata, StoredItem};
use crate::store::{CatalogStore, ItemStream, StoreTransaction, MAX_DELETE_BATCH};

struct Record {
    item: Item,
    metadata: Metadata,
    key_paths: Vec<KeyPath>,
}

impl Record {
    fn to_stored(&self) -> StoredItem {
        StoredItem {
            item: self.item.clone(),
            metadata: self.metadata,
        }
    }
}

#[derive(Default)]
struct State {
    records: HashMap<KeyPath, Record>,
    aliases: BTreeMap<KeyPath, KeyPath>,
    last_write_micros: i64,
}

impl State {
    /// Wall-clock microseconds, forced strictly past the previous write so
    /// every write is ordered after the one before it.
    fn next_write_time(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_micros();
        self.last_write_micros = now.max(self.last_write_micros + 1);
        self.last_write_micros
    }

    fn apply_put(&mut self, item: Item) -> StoredItem {
        let now = self.next_write_time();
        let key_paths = item.key_paths();
        let primary = item.primary_key_path();

        let created_at_micros = match self.records.remove(&primary) {
            Some(previous) => {
                for path in &previous.key_paths {
                    self.aliases.remove(path);
                }
                previous.metadata.created_at_micros
            }
            None => now,
        };

        for path in &key_paths {
            self.aliases.insert(path.clone(), primary.clone());
        }

        let metadata = Metadata {
            created_at_micros,
            last_modified_at_micros: now,
        };
        self.records.insert(
            primary,
            Record {
                item: item.clone(),
                metadata,
                key_paths,
            },
        );
        StoredItem { item, metadata }
    }

    fn apply_delete(&mut self, key_path: &KeyPath) -> bool {
        let Some(primary) = self.aliases.get(key_path).cloned() else {
            return false;
        };
        match self.records.remove(&primary) {
            Some(record) => {
                for path in &record.key_paths {
                    self.aliases.remove(path);
                }
                true
            }
            None => {
                self.aliases.remove(key_path);
                false
            }
        }
    }

    fn resolve(&self, key_path: &KeyPath) -> Option<&Record> {
        self.aliases
            .get(key_path)
            .and_then(|primary| self.records.get(primary))
    }
}

/// Cheaply cloneable handle to one in-memory store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of logical items currently stored.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn get(&self, item_type: ItemType, key_path: &KeyPath) -> StoreResult<Option<StoredItem>> {
        let state = self.state.read().await;
        Ok(state
            .resolve(key_path)
            .filter(|record| record.item.item_type() == item_type)
            .map(Record::to_stored))
    }

    async fn put(&self, item: Item) -> StoreResult<StoredItem> {
        let mut state = self.state.write().await;
        let stored = state.apply_put(item);
        tracing::trace!(key_path = %stored.item.primary_key_path(), "put");
        Ok(stored)
    }

    async fn delete(&self, key_paths: &[KeyPath]) -> StoreResult<()> {
        if key_paths.len() > MAX_DELETE_BATCH {
            return Err(StoreError::BatchTooLarge {
                requested: key_paths.len(),
                max: MAX_DELETE_BATCH,
            });
        }
        let mut state = self.state.write().await;
        let removed = key_paths
            .iter()
            .filter(|path| state.apply_delete(path))
            .count();
        tracing::trace!(requested = key_paths.len(), removed, "delete");
        Ok(())
    }

    async fn scan(&self, item_types: &[ItemType]) -> StoreResult<ItemStream> {
        let state = self.state.read().await;
        let snapshot: Vec<StoredItem> = state
            .records
            .values()
            .filter(|record| item_types.contains(&record.item.item_type()))
            .map(Record::to_stored)
            .collect();
        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn list(&self, prefix: &KeyPath) -> StoreResult<ItemStream> {
        let state = self.state.read().await;
        let mut seen = HashSet::new();
        let snapshot: Vec<StoredItem> = state
            .aliases
            .range(prefix.clone()..)
            .take_while(|(path, _)| path.starts_with(prefix))
            .filter(|(_, primary)| seen.insert((*primary).clone()))
            .filter_map(|(_, primary)| state.records.get(primary))
            .map(Record::to_stored)
            .collect();
        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn begin(&self) -> StoreResult<Box<dyn StoreTransaction>> {
        Ok(Box::new(MemoryTransaction {
            state: Arc::clone(&self.state),
            writes: Vec::new(),
            committed: false,
        }))
    }

    async fn health_check(&self) -> StoreResult<()> {
        let _state = self.state.read().await;
        Ok(())
    }
}

enum Write {
    Put(Item),
    Delete(KeyPath),
}

struct MemoryTransaction {
    state: Arc<RwLock<State>>,
    writes: Vec<Write>,
    committed: bool,
}

impl MemoryTransaction {
    fn ensure_open(&self) -> StoreResult<()> {
        if self.committed {
            return Err(StoreError::TransactionClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn put(&mut self, item: Item) -> StoreResult<()> {
        self.ensure_open()?;
        self.writes.push(Write::Put(item));
        Ok(())
    }

    async fn delete(&mut self, key_paths: &[KeyPath]) -> StoreResult<()> {
        self.ensure_open()?;
        self.writes
            .extend(key_paths.iter().cloned().map(Write::Delete));
        Ok(())
    }

    async fn commit(&mut self) -> StoreResult<()> {
        self.ensure_open()?;
        let writes = std::mem::take(&mut self.writes);
        let count = writes.len();

        let mut state = self.state.write().await;
        for write in writes {
            match write {
                Write::Put(item) => {
                    state.apply_put(item);
                }
                Write::Delete(path) => {
                    state.apply_delete(&path);
                }
            }
        }
        self.committed = true;
        tracing::trace!(writes = count, "commit");
        Ok(())
    }
}
