//! Repository for channels, the roots of the catalog.

use catalog_core::id::EntityId;
use futures::TryStreamExt;

use crate::error::StoreResult;
use crate::key_path::ChannelKey;
use crate::mapper;
use crate::models::channel::{Channel, CreateChannel, UpdateChannel};
use crate::models::item::{ChannelItem, Item, ItemType};
use crate::repositories::cascade::{CascadePlan, CascadeSummary};
use crate::repositories::collect_mapped;
use crate::store::StoreHandle;

/// Provides CRUD operations for channels plus the cascading delete.
#[derive(Clone)]
pub struct ChannelRepo {
    store: StoreHandle,
}

impl ChannelRepo {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Insert a new channel, returning its identifier.
    pub async fn create(&self, input: &CreateChannel) -> StoreResult<EntityId> {
        let item = input.to_item();
        let channel_id = item.channel_id;
        self.store.put(Item::Channel(item)).await?;
        tracing::debug!(%channel_id, "Created channel");
        Ok(channel_id)
    }

    /// Replace a channel's fields. `created_at` is kept by the store.
    ///
    /// This is a plain put: a channel that does not exist yet is created.
    pub async fn update(&self, channel_id: EntityId, input: &UpdateChannel) -> StoreResult<Channel> {
        let item = ChannelItem {
            channel_id,
            name: input.name.clone(),
            description: input.description.clone(),
        };
        let stored = self.store.put(Item::Channel(item.clone())).await?;
        Ok(mapper::to_channel(item, &stored.metadata))
    }

    pub async fn find_by_id(&self, channel_id: EntityId) -> StoreResult<Option<Channel>> {
        let key = ChannelKey::new(channel_id);
        let stored = self.store.get(ItemType::Channel, &key.key_path()).await?;
        Ok(stored.and_then(mapper::channel_from_stored))
    }

    /// List every channel, sorted by name ascending (case-insensitive).
    pub async fn list(&self) -> StoreResult<Vec<Channel>> {
        let stream = self.store.scan(&[ItemType::Channel]).await?;
        let mut channels = collect_mapped(stream, mapper::channel_from_stored).await?;
        channels.sort_by_cached_key(|c| (c.name.to_lowercase(), c.name.clone()));
        Ok(channels)
    }

    /// Whether at least one channel exists. Reads no further than the first
    /// channel the scan yields.
    pub async fn exists_any(&self) -> StoreResult<bool> {
        let mut stream = self.store.scan(&[ItemType::Channel]).await?;
        while let Some(stored) = stream.try_next().await? {
            if stored.is_type(ItemType::Channel) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Delete a channel together with all of its shows and their characters.
    ///
    /// Characters go first, then each show, then the channel, all inside one
    /// store transaction. A missing channel yields an empty summary.
    pub async fn delete(&self, channel_id: EntityId) -> StoreResult<CascadeSummary> {
        let key = ChannelKey::new(channel_id);
        let mut plan = CascadePlan::new();
        plan.add_channel(self.store.as_ref(), &key).await?;
        let summary = plan.execute(self.store.as_ref()).await?;
        if summary.channels == 0 {
            tracing::debug!(%channel_id, "Channel not found, nothing deleted");
            return Ok(summary);
        }
        tracing::info!(
            %channel_id,
            shows = summary.shows,
            characters = summary.characters,
            "Deleted channel with descendants"
        );
        Ok(summary)
    }
}
