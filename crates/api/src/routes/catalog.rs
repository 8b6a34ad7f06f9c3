//! Flat listings across every channel.

use axum::routing::get;
use axum::Router;

use crate::handlers::{character, show};
use crate::state::AppState;

/// ```text
/// GET /shows       -> show::list
/// GET /characters  -> character::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(show::list))
        .route("/characters", get(character::list))
}
