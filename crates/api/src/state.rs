use std::sync::Arc;

use catalog_db::repositories::{ChannelRepo, CharacterRepo, MaintenanceRepo, ShowRepo};
use catalog_db::{Seeder, StoreHandle};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the catalog store.
    pub store: StoreHandle,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: StoreHandle, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn channels(&self) -> ChannelRepo {
        ChannelRepo::new(self.store.clone())
    }

    pub fn shows(&self) -> ShowRepo {
        ShowRepo::new(self.store.clone())
    }

    pub fn characters(&self) -> CharacterRepo {
        CharacterRepo::new(self.store.clone())
    }

    pub fn maintenance(&self) -> MaintenanceRepo {
        MaintenanceRepo::new(self.store.clone())
    }

    pub fn seeder(&self) -> Seeder {
        Seeder::new(self.store.clone())
    }
}
