//! Repository for characters, the leaves of the catalog.

use catalog_core::id::EntityId;

use crate::error::StoreResult;
use crate::key_path::{character_path, CharacterKey, ShowKey};
use crate::mapper;
use crate::models::character::{Character, CreateCharacter, UpdateCharacter};
use crate::models::item::{CharacterItem, Item, ItemType};
use crate::repositories::collect_mapped;
use crate::store::StoreHandle;

/// Provides CRUD operations for characters.
#[derive(Clone)]
pub struct CharacterRepo {
    store: StoreHandle,
}

impl CharacterRepo {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Insert a new character under `show`, returning its identifier.
    ///
    /// The show is not checked; callers verify it exists.
    pub async fn create(&self, show: &ShowKey, input: &CreateCharacter) -> StoreResult<EntityId> {
        let item = input.to_item(show);
        let character_id = item.character_id;
        self.store.put(Item::Character(item)).await?;
        tracing::debug!(
            channel_id = %show.channel_id,
            show_id = %show.show_id,
            %character_id,
            "Created character"
        );
        Ok(character_id)
    }

    /// Replace a character's fields. Creates the character if it does not exist.
    pub async fn update(
        &self,
        key: &CharacterKey,
        input: &UpdateCharacter,
    ) -> StoreResult<Character> {
        let item = CharacterItem {
            channel_id: key.channel_id,
            show_id: key.show_id,
            character_id: key.character_id,
            name: input.name.clone(),
            role: input.role.clone(),
            description: input.description.clone(),
        };
        let stored = self.store.put(Item::Character(item.clone())).await?;
        Ok(mapper::to_character(item, &stored.metadata))
    }

    pub async fn find(&self, key: &CharacterKey) -> StoreResult<Option<Character>> {
        let stored = self
            .store
            .get(ItemType::Character, &key.nested_path())
            .await?;
        Ok(stored.and_then(mapper::character_from_stored))
    }

    /// Look up a character by its own id alone.
    pub async fn find_by_id(&self, character_id: EntityId) -> StoreResult<Option<Character>> {
        let stored = self
            .store
            .get(ItemType::Character, &character_path(&character_id))
            .await?;
        Ok(stored.and_then(mapper::character_from_stored))
    }

    /// Every character in the catalog, in scan order.
    pub async fn list(&self) -> StoreResult<Vec<Character>> {
        let stream = self.store.scan(&[ItemType::Character]).await?;
        collect_mapped(stream, mapper::character_from_stored).await
    }

    /// Characters of one show, in key-path order. Empty when there are none.
    pub async fn list_by_show(&self, show: &ShowKey) -> StoreResult<Vec<Character>> {
        let stream = self.store.list(&show.characters_prefix()).await?;
        collect_mapped(stream, mapper::character_from_stored).await
    }

    /// Delete a single character. Nothing hangs below a character, so there
    /// is no cascade.
    pub async fn delete(&self, key: &CharacterKey) -> StoreResult<()> {
        self.store.delete(&[key.flat_path()]).await?;
        tracing::debug!(character_id = %key.character_id, "Deleted character");
        Ok(())
    }
}
