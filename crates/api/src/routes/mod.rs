pub mod admin;
pub mod catalog;
pub mod channel;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /channels                                         list, create
/// /channels/{channel_id}                            get, update, delete (cascade)
/// /channels/{channel_id}/shows                      list, create
/// /channels/{channel_id}/shows/{show_id}            get, update, delete (cascade)
/// /channels/{channel_id}/shows/{show_id}/characters list, create
/// /channels/{channel_id}/shows/{show_id}/characters/{character_id}
///                                                   get, update, delete
///
/// /shows                                            every show
/// /characters                                       every character
///
/// /admin/bootstrap                                  bootstrap status
/// /admin/bootstrap/seed                             seed demo catalog (POST)
/// /admin/reset                                      delete everything (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/channels", channel::router())
        .merge(catalog::router())
        .nest("/admin", admin::router())
}
