//! Repository for shows, nested under channels.

use catalog_core::id::EntityId;

use crate::error::StoreResult;
use crate::key_path::{show_path, ChannelKey, ShowKey};
use crate::mapper;
use crate::models::item::{Item, ItemType, ShowItem};
use crate::models::show::{CreateShow, Show, UpdateShow};
use crate::repositories::cascade::{CascadePlan, CascadeSummary};
use crate::repositories::collect_mapped;
use crate::store::StoreHandle;

/// Provides CRUD operations for shows plus the cascading delete.
#[derive(Clone)]
pub struct ShowRepo {
    store: StoreHandle,
}

impl ShowRepo {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Insert a new show under `channel_id`, returning its identifier.
    ///
    /// The channel is not checked; callers verify it exists.
    pub async fn create(&self, channel_id: EntityId, input: &CreateShow) -> StoreResult<EntityId> {
        let item = input.to_item(channel_id);
        let show_id = item.show_id;
        self.store.put(Item::Show(item)).await?;
        tracing::debug!(%channel_id, %show_id, "Created show");
        Ok(show_id)
    }

    /// Replace a show's fields. Creates the show if it does not exist.
    pub async fn update(&self, key: &ShowKey, input: &UpdateShow) -> StoreResult<Show> {
        let item = ShowItem {
            channel_id: key.channel_id,
            show_id: key.show_id,
            title: input.title.clone(),
            description: input.description.clone(),
            year: input.year,
        };
        let stored = self.store.put(Item::Show(item.clone())).await?;
        Ok(mapper::to_show(item, &stored.metadata))
    }

    /// Look up a show through its nested path, so a show is only found under
    /// the channel it belongs to.
    pub async fn find(&self, key: &ShowKey) -> StoreResult<Option<Show>> {
        let stored = self.store.get(ItemType::Show, &key.nested_path()).await?;
        Ok(stored.and_then(mapper::show_from_stored))
    }

    /// Look up a show by its own id alone.
    pub async fn find_by_id(&self, show_id: EntityId) -> StoreResult<Option<Show>> {
        let stored = self.store.get(ItemType::Show, &show_path(&show_id)).await?;
        Ok(stored.and_then(mapper::show_from_stored))
    }

    /// Every show in the catalog, in scan order.
    pub async fn list(&self) -> StoreResult<Vec<Show>> {
        let stream = self.store.scan(&[ItemType::Show]).await?;
        collect_mapped(stream, mapper::show_from_stored).await
    }

    /// Shows of one channel, in key-path order. Empty when there are none.
    pub async fn list_by_channel(&self, channel_id: EntityId) -> StoreResult<Vec<Show>> {
        let prefix = ChannelKey::new(channel_id).shows_prefix();
        let stream = self.store.list(&prefix).await?;
        collect_mapped(stream, mapper::show_from_stored).await
    }

    /// Delete a show together with its characters, characters first.
    ///
    /// The show must live under `key.channel_id`; otherwise nothing is deleted.
    pub async fn delete(&self, key: &ShowKey) -> StoreResult<CascadeSummary> {
        let mut plan = CascadePlan::new();
        plan.add_show(self.store.as_ref(), key).await?;
        let summary = plan.execute(self.store.as_ref()).await?;
        if summary.shows == 0 {
            tracing::debug!(
                channel_id = %key.channel_id,
                show_id = %key.show_id,
                "Show not found under channel, nothing deleted"
            );
            return Ok(summary);
        }
        tracing::info!(
            channel_id = %key.channel_id,
            show_id = %key.show_id,
            characters = summary.characters,
            "Deleted show with characters"
        );
        Ok(summary)
    }
}
