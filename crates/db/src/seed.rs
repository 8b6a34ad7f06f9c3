//! Bootstrap seeder for the demo catalog.
//!
//! Seeding is idempotent at the catalog level: if any channel exists the
//! seeder does nothing. Otherwise the whole demo catalog is written in a
//! single store transaction, so a failed seed leaves nothing behind.

use catalog_core::id::EntityId;

use crate::error::StoreResult;
use crate::models::item::{ChannelItem, CharacterItem, Item, ShowItem};
use crate::repositories::ChannelRepo;
use crate::seed_data::{ChannelSeed, ShowSeed, DEMO_CATALOG};
use crate::store::{StoreHandle, StoreTransaction};

/// Result of a call to [`Seeder::seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held at least one channel; nothing was written.
    AlreadySeeded,
    /// The demo catalog was inserted.
    Seeded {
        channels: usize,
        shows: usize,
        characters: usize,
    },
}

impl SeedOutcome {
    pub fn records_written(&self) -> usize {
        match self {
            Self::AlreadySeeded => 0,
            Self::Seeded {
                channels,
                shows,
                characters,
            } => channels + shows + characters,
        }
    }
}

#[derive(Clone)]
pub struct Seeder {
    store: StoreHandle,
}

impl Seeder {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Insert the demo catalog unless a channel already exists.
    pub async fn seed(&self) -> StoreResult<SeedOutcome> {
        if ChannelRepo::new(self.store.clone()).exists_any().await? {
            tracing::info!("Catalog already has channels, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut txn = self.store.begin().await?;
        let mut counts = (0, 0, 0);
        for channel in DEMO_CATALOG {
            let (shows, characters) = write_channel(txn.as_mut(), channel).await?;
            counts.0 += 1;
            counts.1 += shows;
            counts.2 += characters;
        }
        txn.commit().await?;

        let (channels, shows, characters) = counts;
        tracing::info!(channels, shows, characters, "Seeded demo catalog");
        Ok(SeedOutcome::Seeded {
            channels,
            shows,
            characters,
        })
    }
}

/// Queue one channel with all its shows. Returns `(shows, characters)`.
async fn write_channel(
    txn: &mut dyn StoreTransaction,
    seed: &ChannelSeed,
) -> StoreResult<(usize, usize)> {
    let channel_id = EntityId::new();
    txn.put(Item::Channel(ChannelItem {
        channel_id,
        name: seed.name.to_owned(),
        description: seed.description.to_owned(),
    }))
    .await?;

    let mut characters = 0;
    for show in seed.shows {
        characters += write_show(txn, channel_id, show).await?;
    }
    Ok((seed.shows.len(), characters))
}

async fn write_show(
    txn: &mut dyn StoreTransaction,
    channel_id: EntityId,
    seed: &ShowSeed,
) -> StoreResult<usize> {
    let show_id = EntityId::new();
    txn.put(Item::Show(ShowItem {
        channel_id,
        show_id,
        title: seed.title.to_owned(),
        description: seed.description.to_owned(),
        year: seed.year,
    }))
    .await?;

    let characters: Vec<Item> = seed
        .characters
        .iter()
        .map(|c| {
            Item::Character(CharacterItem {
                channel_id,
                show_id,
                character_id: EntityId::new(),
                name: c.name.to_owned(),
                role: c.role.to_owned(),
                description: c.description.to_owned(),
            })
        })
        .collect();
    let count = characters.len();
    if count > 0 {
        txn.put_batch(characters).await?;
    }
    Ok(count)
}
