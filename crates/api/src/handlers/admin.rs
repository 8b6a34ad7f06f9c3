//! Handlers for catalog administration: demo bootstrap and full reset.

use axum::extract::State;
use axum::response::Redirect;
use axum::Json;
use catalog_db::SeedOutcome;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Where the reset hands the client back to.
pub const BOOTSTRAP_PATH: &str = "/api/v1/admin/bootstrap";

#[derive(Debug, Serialize)]
pub struct BootstrapStatus {
    /// Whether at least one channel exists.
    pub seeded: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedResponse {
    AlreadySeeded,
    Seeded {
        channels: usize,
        shows: usize,
        characters: usize,
    },
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::AlreadySeeded => Self::AlreadySeeded,
            SeedOutcome::Seeded {
                channels,
                shows,
                characters,
            } => Self::Seeded {
                channels,
                shows,
                characters,
            },
        }
    }
}

/// GET /api/v1/admin/bootstrap
pub async fn bootstrap_status(State(state): State<AppState>) -> AppResult<Json<BootstrapStatus>> {
    let seeded = state.channels().exists_any().await?;
    Ok(Json(BootstrapStatus { seeded }))
}

/// POST /api/v1/admin/bootstrap/seed
///
/// Inserts the demo catalog unless a channel already exists.
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let outcome = state.seeder().seed().await?;
    Ok(Json(outcome.into()))
}

/// POST /api/v1/admin/reset
///
/// Deletes every record, then redirects (303) to the bootstrap status.
pub async fn reset(State(state): State<AppState>) -> AppResult<Redirect> {
    let summary = state.maintenance().delete_all().await?;
    tracing::info!(
        deleted = summary.deleted,
        batches = summary.batches,
        "Reset requested over HTTP"
    );
    Ok(Redirect::to(BOOTSTRAP_PATH))
}
