//! Administrative operations spanning every kind.

use futures::TryStreamExt;

use crate::error::StoreResult;
use crate::key_path::KeyPath;
use crate::models::item::ItemType;
use crate::store::{StoreHandle, MAX_DELETE_BATCH};

/// Outcome of [`MaintenanceRepo::delete_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetSummary {
    /// Records collected by the scan and sent for deletion.
    pub deleted: usize,
    /// Number of multi-delete calls issued.
    pub batches: usize,
}

#[derive(Clone)]
pub struct MaintenanceRepo {
    store: StoreHandle,
}

impl MaintenanceRepo {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Remove every channel, show and character.
    ///
    /// Scans all three kinds, then deletes in batches of at most
    /// [`MAX_DELETE_BATCH`] key paths. Each batch is atomic on its own; a
    /// failure part way leaves earlier batches deleted.
    pub async fn delete_all(&self) -> StoreResult<ResetSummary> {
        let key_paths: Vec<KeyPath> = self
            .store
            .scan(&ItemType::ALL)
            .await?
            .map_ok(|stored| stored.item.primary_key_path())
            .try_collect()
            .await?;

        let mut summary = ResetSummary::default();
        for batch in key_paths.chunks(MAX_DELETE_BATCH) {
            self.store.delete(batch).await?;
            summary.deleted += batch.len();
            summary.batches += 1;
            tracing::debug!(batch = summary.batches, size = batch.len(), "Deleted batch");
        }

        tracing::info!(
            deleted = summary.deleted,
            batches = summary.batches,
            "Catalog reset"
        );
        Ok(summary)
    }
}
