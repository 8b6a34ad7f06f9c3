//! Character entity model and DTOs.

use catalog_core::id::EntityId;
use catalog_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::key_path::ShowKey;
use crate::models::item::CharacterItem;

/// A character as handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub id: EntityId,
    pub channel_id: EntityId,
    pub show_id: EntityId,
    pub name: String,
    pub role: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character under a show.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    /// Generated when omitted.
    #[serde(default)]
    pub character_id: Option<EntityId>,
    pub name: String,
    pub role: String,
    pub description: String,
}

impl CreateCharacter {
    pub(crate) fn to_item(&self, show: &ShowKey) -> CharacterItem {
        CharacterItem {
            channel_id: show.channel_id,
            show_id: show.show_id,
            character_id: self.character_id.unwrap_or_else(EntityId::new),
            name: self.name.clone(),
            role: self.role.clone(),
            description: self.description.clone(),
        }
    }
}

/// DTO for replacing a character. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    pub name: String,
    pub role: String,
    pub description: String,
}
