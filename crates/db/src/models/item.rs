//! Raw records as the store holds them.
//!
//! An [`Item`] knows its kind and every key path it is addressable by; the
//! store never needs to understand the catalog beyond that. Timestamps are
//! not part of the record: the store stamps them as [`Metadata`] on write.

use catalog_core::id::EntityId;

use crate::key_path::{ChannelKey, CharacterKey, KeyPath, ShowKey};

/// Kind marker used by scans and the type-discrimination check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Channel,
    Show,
    Character,
}

impl ItemType {
    /// All kinds, parents before children.
    pub const ALL: [ItemType; 3] = [ItemType::Channel, ItemType::Show, ItemType::Character];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Channel => "Channel",
            Self::Show => "Show",
            Self::Character => "Character",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelItem {
    pub channel_id: EntityId,
    pub name: String,
    pub description: String,
}

impl ChannelItem {
    pub fn key(&self) -> ChannelKey {
        ChannelKey::new(self.channel_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowItem {
    pub channel_id: EntityId,
    pub show_id: EntityId,
    pub title: String,
    pub description: String,
    pub year: i32,
}

impl ShowItem {
    pub fn key(&self) -> ShowKey {
        ShowKey::new(self.channel_id, self.show_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterItem {
    pub channel_id: EntityId,
    pub show_id: EntityId,
    pub character_id: EntityId,
    pub name: String,
    pub role: String,
    pub description: String,
}

impl CharacterItem {
    pub fn key(&self) -> CharacterKey {
        CharacterKey::new(self.channel_id, self.show_id, self.character_id)
    }
}

/// One logical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Channel(ChannelItem),
    Show(ShowItem),
    Character(CharacterItem),
}

impl Item {
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Channel(_) => ItemType::Channel,
            Self::Show(_) => ItemType::Show,
            Self::Character(_) => ItemType::Character,
        }
    }

    /// Every key path this item answers to. The first entry is the flat,
    /// id-only path and serves as the item's primary key.
    pub fn key_paths(&self) -> Vec<KeyPath> {
        match self {
            Self::Channel(c) => vec![c.key().key_path()],
            Self::Show(s) => {
                let key = s.key();
                vec![key.flat_path(), key.nested_path()]
            }
            Self::Character(c) => {
                let key = c.key();
                vec![key.flat_path(), key.nested_path()]
            }
        }
    }

    pub fn primary_key_path(&self) -> KeyPath {
        match self {
            Self::Channel(c) => c.key().key_path(),
            Self::Show(s) => s.key().flat_path(),
            Self::Character(c) => c.key().flat_path(),
        }
    }
}

/// Write timestamps maintained by the store, in microseconds since the
/// Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// Set on the first write of an item and carried across overwrites.
    pub created_at_micros: i64,
    /// Refreshed on every write.
    pub last_modified_at_micros: i64,
}

/// An item as returned by the store, with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub item: Item,
    pub metadata: Metadata,
}

impl StoredItem {
    pub fn item_type(&self) -> ItemType {
        self.item.item_type()
    }

    pub fn is_type(&self, item_type: ItemType) -> bool {
        self.item_type() == item_type
    }
}
