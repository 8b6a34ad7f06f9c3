//! Channel entity model and DTOs.

use catalog_core::id::EntityId;
use catalog_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::item::ChannelItem;

/// A channel as handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new channel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChannel {
    /// Generated when omitted.
    #[serde(default)]
    pub channel_id: Option<EntityId>,
    pub name: String,
    pub description: String,
}

impl CreateChannel {
    pub(crate) fn to_item(&self) -> ChannelItem {
        ChannelItem {
            channel_id: self.channel_id.unwrap_or_else(EntityId::new),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// DTO for replacing a channel. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChannel {
    pub name: String,
    pub description: String,
}
