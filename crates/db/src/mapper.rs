//! Entity mapper: store records to domain entities.
//!
//! Each `*_from_stored` function returns `None` when the record is of a
//! different kind, which lets callers map mixed scan results directly.

use catalog_core::types::Timestamp;
use chrono::DateTime;

use crate::models::channel::Channel;
use crate::models::character::Character;
use crate::models::item::{ChannelItem, CharacterItem, Item, Metadata, ShowItem, StoredItem};
use crate::models::show::Show;

/// Convert store microseconds into a UTC timestamp.
///
/// Values outside chrono's range collapse to the Unix epoch.
pub fn timestamp_from_micros(micros: i64) -> Timestamp {
    DateTime::from_timestamp_micros(micros).unwrap_or_default()
}

pub fn to_channel(item: ChannelItem, metadata: &Metadata) -> Channel {
    Channel {
        id: item.channel_id,
        name: item.name,
        description: item.description,
        created_at: timestamp_from_micros(metadata.created_at_micros),
        updated_at: timestamp_from_micros(metadata.last_modified_at_micros),
    }
}

pub fn to_show(item: ShowItem, metadata: &Metadata) -> Show {
    Show {
        id: item.show_id,
        channel_id: item.channel_id,
        title: item.title,
        description: item.description,
        year: item.year,
        created_at: timestamp_from_micros(metadata.created_at_micros),
        updated_at: timestamp_from_micros(metadata.last_modified_at_micros),
    }
}

pub fn to_character(item: CharacterItem, metadata: &Metadata) -> Character {
    Character {
        id: item.character_id,
        channel_id: item.channel_id,
        show_id: item.show_id,
        name: item.name,
        role: item.role,
        description: item.description,
        created_at: timestamp_from_micros(metadata.created_at_micros),
        updated_at: timestamp_from_micros(metadata.last_modified_at_micros),
    }
}

pub fn channel_from_stored(stored: StoredItem) -> Option<Channel> {
    match stored.item {
        Item::Channel(item) => Some(to_channel(item, &stored.metadata)),
        _ => None,
    }
}

pub fn show_from_stored(stored: StoredItem) -> Option<Show> {
    match stored.item {
        Item::Show(item) => Some(to_show(item, &stored.metadata)),
        _ => None,
    }
}

pub fn character_from_stored(stored: StoredItem) -> Option<Character> {
    match stored.item {
        Item::Character(item) => Some(to_character(item, &stored.metadata)),
        _ => None,
    }
}
