//! Route definitions for catalog administration.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /bootstrap        -> bootstrap_status
/// POST   /bootstrap/seed   -> seed
/// POST   /reset            -> reset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bootstrap", get(admin::bootstrap_status))
        .route("/bootstrap/seed", post(admin::seed))
        .route("/reset", post(admin::reset))
}
