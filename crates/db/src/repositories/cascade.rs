//! Cascade deletes across the channel → show → character hierarchy.
//!
//! The store has no foreign keys, so descendants are found through the
//! nested key paths and deleted explicitly. A [`CascadePlan`] collects the
//! flat key path of every record to remove, children strictly before their
//! parent, and then issues all of them in one transaction.

use crate::error::StoreResult;
use crate::key_path::{ChannelKey, CharacterKey, KeyPath, ShowKey};
use crate::models::item::{Item, ItemType, StoredItem};
use crate::repositories::collect_mapped;
use crate::store::CatalogStore;

/// How many records a cascade removed, per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub channels: usize,
    pub shows: usize,
    pub characters: usize,
}

impl CascadeSummary {
    pub fn total(&self) -> usize {
        self.channels + self.shows + self.characters
    }
}

fn show_key(stored: StoredItem) -> Option<ShowKey> {
    match stored.item {
        Item::Show(show) => Some(show.key()),
        _ => None,
    }
}

fn character_key(stored: StoredItem) -> Option<CharacterKey> {
    match stored.item {
        Item::Character(character) => Some(character.key()),
        _ => None,
    }
}

/// Bottom-up list of key paths to delete.
#[derive(Debug, Default)]
pub(crate) struct CascadePlan {
    key_paths: Vec<KeyPath>,
    summary: CascadeSummary,
}

impl CascadePlan {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue every character of the show, then the show itself.
    ///
    /// Queues nothing when the show is not stored under the given channel.
    pub(crate) async fn add_show(
        &mut self,
        store: &dyn CatalogStore,
        show: &ShowKey,
    ) -> StoreResult<()> {
        if store.get(ItemType::Show, &show.nested_path()).await?.is_none() {
            return Ok(());
        }
        self.queue_show(store, show).await
    }

    /// Queue every show of the channel (each with its characters), then the
    /// channel itself. Queues nothing for a missing channel.
    pub(crate) async fn add_channel(
        &mut self,
        store: &dyn CatalogStore,
        channel: &ChannelKey,
    ) -> StoreResult<()> {
        if store.get(ItemType::Channel, &channel.key_path()).await?.is_none() {
            return Ok(());
        }
        let shows = collect_mapped(store.list(&channel.shows_prefix()).await?, show_key).await?;
        for show in &shows {
            self.queue_show(store, show).await?;
        }
        self.key_paths.push(channel.key_path());
        self.summary.channels += 1;
        Ok(())
    }

    /// `show` must come from a listing under its real channel.
    async fn queue_show(&mut self, store: &dyn CatalogStore, show: &ShowKey) -> StoreResult<()> {
        let characters =
            collect_mapped(store.list(&show.characters_prefix()).await?, character_key).await?;
        for character in characters {
            self.key_paths.push(character.flat_path());
            self.summary.characters += 1;
        }
        self.key_paths.push(show.flat_path());
        self.summary.shows += 1;
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.key_paths.is_empty()
    }

    /// Delete everything queued, in queue order, as a single transaction.
    pub(crate) async fn execute(self, store: &dyn CatalogStore) -> StoreResult<CascadeSummary> {
        if self.is_empty() {
            return Ok(self.summary);
        }
        let mut txn = store.begin().await?;
        txn.delete(&self.key_paths).await?;
        txn.commit().await?;
        Ok(self.summary)
    }

    #[cfg(test)]
    fn key_paths(&self) -> &[KeyPath] {
        &self.key_paths
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::id::EntityId;

    use super::*;
    use crate::models::item::{ChannelItem, CharacterItem, ShowItem};
    use crate::store::memory::MemoryStore;

    #[tokio::test]
    async fn plan_orders_children_before_parents() {
        let store = MemoryStore::new();
        let channel = ChannelItem {
            channel_id: EntityId::new(),
            name: "Action Network".into(),
            description: "Action".into(),
        };
        let show = ShowItem {
            channel_id: channel.channel_id,
            show_id: EntityId::new(),
            title: "Strike Force".into(),
            description: "Operatives".into(),
            year: 2023,
        };
        let character = CharacterItem {
            channel_id: channel.channel_id,
            show_id: show.show_id,
            character_id: EntityId::new(),
            name: "Jack Reeves".into(),
            role: "Team Leader".into(),
            description: "Former Navy SEAL".into(),
        };
        store.put(Item::Channel(channel.clone())).await.unwrap();
        store.put(Item::Show(show.clone())).await.unwrap();
        store.put(Item::Character(character.clone())).await.unwrap();

        let mut plan = CascadePlan::new();
        plan.add_channel(&store, &channel.key()).await.unwrap();

        assert_eq!(
            plan.key_paths(),
            &[
                character.key().flat_path(),
                show.key().flat_path(),
                channel.key().key_path(),
            ]
        );

        let summary = plan.execute(&store).await.unwrap();
        assert_eq!(summary.total(), 3);
        assert!(store.is_empty().await);
    }
}
