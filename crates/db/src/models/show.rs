//! Show entity model and DTOs.

use catalog_core::id::EntityId;
use catalog_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::item::ShowItem;

/// A show as handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Show {
    pub id: EntityId,
    pub channel_id: EntityId,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new show under a channel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    /// Generated when omitted.
    #[serde(default)]
    pub show_id: Option<EntityId>,
    pub title: String,
    pub description: String,
    pub year: i32,
}

impl CreateShow {
    pub(crate) fn to_item(&self, channel_id: EntityId) -> ShowItem {
        ShowItem {
            channel_id,
            show_id: self.show_id.unwrap_or_else(EntityId::new),
            title: self.title.clone(),
            description: self.description.clone(),
            year: self.year,
        }
    }
}

/// DTO for replacing a show. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShow {
    pub title: String,
    pub description: String,
    pub year: i32,
}
