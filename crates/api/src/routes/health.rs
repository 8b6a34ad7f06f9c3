//! Liveness probe, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

impl HealthStatus {
    fn status_code(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub store_healthy: bool,
    /// `None` when the store could not be asked.
    pub catalog_seeded: Option<bool>,
}

/// GET /health
///
/// `200` while the store answers, `503` otherwise. Also reports whether the
/// demo catalog has been loaded.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store_healthy = match catalog_db::health_check(state.store.as_ref()).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            false
        }
    };

    let catalog_seeded = if store_healthy {
        state.channels().exists_any().await.ok()
    } else {
        None
    };

    let status = if store_healthy {
        HealthStatus::Ok
    } else {
        HealthStatus::Degraded
    };

    (
        status.status_code(),
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store_healthy,
            catalog_seeded,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
