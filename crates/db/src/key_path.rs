//! Key-path builder.
//!
//! Every record lives at one or more slash-delimited key paths. The parent
//! chain is encoded directly in the nested path, so listing a prefix yields
//! a parent's descendants:
//!
//! ```text
//! /channel-{channel_id}
//! /show-{show_id}
//! /channel-{channel_id}/show-{show_id}
//! /character-{character_id}
//! /channel-{channel_id}/show-{show_id}/character-{character_id}
//! ```
//!
//! The flat paths (`/show-…`, `/character-…`) support lookup and delete by
//! id alone; the nested paths support prefix listing. Both name the same
//! item.

use std::fmt;

use catalog_core::id::EntityId;

const CHANNEL_SEGMENT: &str = "channel-";
const SHOW_SEGMENT: &str = "show-";
const CHARACTER_SEGMENT: &str = "character-";

/// A slash-delimited address in the store's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath(String);

impl KeyPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this path sits at or below `prefix`.
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    fn root() -> Self {
        Self(String::new())
    }

    fn push(mut self, segment: &str, id: &EntityId) -> Self {
        self.0.push('/');
        self.0.push_str(segment);
        self.0.push_str(&id.to_string());
        self
    }

    fn open(mut self, segment: &str) -> Self {
        self.0.push('/');
        self.0.push_str(segment);
        self
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `/show-{show_id}`: a show addressed by its own id alone.
pub fn show_path(show_id: &EntityId) -> KeyPath {
    KeyPath::root().push(SHOW_SEGMENT, show_id)
}

/// `/character-{character_id}`: a character addressed by its own id alone.
pub fn character_path(character_id: &EntityId) -> KeyPath {
    KeyPath::root().push(CHARACTER_SEGMENT, character_id)
}

/// Identity chain of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelKey {
    pub channel_id: EntityId,
}

impl ChannelKey {
    pub fn new(channel_id: EntityId) -> Self {
        Self { channel_id }
    }

    /// `/channel-{channel_id}`. Channels are roots, so there is only one path.
    pub fn key_path(&self) -> KeyPath {
        KeyPath::root().push(CHANNEL_SEGMENT, &self.channel_id)
    }

    /// `/channel-{channel_id}/show-`: everything stored under the channel's shows.
    pub fn shows_prefix(&self) -> KeyPath {
        self.key_path().open(SHOW_SEGMENT)
    }
}

/// Identity chain of a show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShowKey {
    pub channel_id: EntityId,
    pub show_id: EntityId,
}

impl ShowKey {
    pub fn new(channel_id: EntityId, show_id: EntityId) -> Self {
        Self {
            channel_id,
            show_id,
        }
    }

    pub fn channel(&self) -> ChannelKey {
        ChannelKey::new(self.channel_id)
    }

    /// `/show-{show_id}`
    pub fn flat_path(&self) -> KeyPath {
        show_path(&self.show_id)
    }

    /// `/channel-{channel_id}/show-{show_id}`
    pub fn nested_path(&self) -> KeyPath {
        self.channel().key_path().push(SHOW_SEGMENT, &self.show_id)
    }

    /// `/channel-{channel_id}/show-{show_id}/character-`
    pub fn characters_prefix(&self) -> KeyPath {
        self.nested_path().open(CHARACTER_SEGMENT)
    }
}

/// Identity chain of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterKey {
    pub channel_id: EntityId,
    pub show_id: EntityId,
    pub character_id: EntityId,
}

impl CharacterKey {
    pub fn new(channel_id: EntityId, show_id: EntityId, character_id: EntityId) -> Self {
        Self {
            channel_id,
            show_id,
            character_id,
        }
    }

    pub fn show(&self) -> ShowKey {
        ShowKey::new(self.channel_id, self.show_id)
    }

    /// `/character-{character_id}`
    pub fn flat_path(&self) -> KeyPath {
        character_path(&self.character_id)
    }

    /// `/channel-{channel_id}/show-{show_id}/character-{character_id}`
    pub fn nested_path(&self) -> KeyPath {
        self.show()
            .nested_path()
            .push(CHARACTER_SEGMENT, &self.character_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(byte: u8) -> EntityId {
        EntityId::from_bytes([byte; 16])
    }

    #[test]
    fn channel_path() {
        let key = ChannelKey::new(id(0x01));
        assert_eq!(
            key.key_path().as_str(),
            "/channel-01010101010101010101010101010101"
        );
    }

    #[test]
    fn show_paths() {
        let key = ShowKey::new(id(0x01), id(0x02));
        assert_eq!(
            key.flat_path().as_str(),
            "/show-02020202020202020202020202020202"
        );
        assert_eq!(
            key.nested_path().as_str(),
            "/channel-01010101010101010101010101010101/show-02020202020202020202020202020202"
        );
    }

    #[test]
    fn character_paths() {
        let key = CharacterKey::new(id(0x01), id(0x02), id(0x03));
        assert_eq!(
            key.flat_path().as_str(),
            "/character-03030303030303030303030303030303"
        );
        assert_eq!(
            key.nested_path().as_str(),
            "/channel-01010101010101010101010101010101\
             /show-02020202020202020202020202020202\
             /character-03030303030303030303030303030303"
        );
    }

    #[test]
    fn paths_are_deterministic() {
        let key = CharacterKey::new(id(9), id(8), id(7));
        assert_eq!(key.nested_path(), key.nested_path());
        assert_eq!(key.flat_path(), key.flat_path());
    }

    #[test]
    fn nested_paths_fall_under_parent_prefixes() {
        let character = CharacterKey::new(id(1), id(2), id(3));
        let show = character.show();
        let channel = show.channel();

        assert!(show.nested_path().starts_with(&channel.shows_prefix()));
        assert!(character.nested_path().starts_with(&show.characters_prefix()));
        assert!(character.nested_path().starts_with(&channel.shows_prefix()));
        assert!(!character.flat_path().starts_with(&channel.shows_prefix()));
    }

    #[test]
    fn sibling_prefixes_do_not_overlap() {
        let a = ShowKey::new(id(1), id(2));
        let b = ShowKey::new(id(1), id(4));
        let other_channel = ChannelKey::new(id(5));

        assert!(!b.nested_path().starts_with(&a.characters_prefix()));
        assert!(!a.nested_path().starts_with(&other_channel.shows_prefix()));
    }
}
