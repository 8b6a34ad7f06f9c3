//! Route definitions for the `/channels` resource.
//!
//! Shows and characters are nested under their channel, mirroring the key
//! paths they are stored at.

use axum::routing::get;
use axum::Router;

use crate::handlers::{channel, character, show};
use crate::state::AppState;

/// Routes mounted at `/channels`.
///
/// ```text
/// GET    /                                                     -> list
/// POST   /                                                     -> create
/// GET    /{channel_id}                                         -> get_by_id
/// PUT    /{channel_id}                                         -> update
/// DELETE /{channel_id}                                         -> delete
///
/// GET    /{channel_id}/shows                                   -> list_by_channel
/// POST   /{channel_id}/shows                                   -> create
/// GET    /{channel_id}/shows/{show_id}                         -> get_by_id
/// PUT    /{channel_id}/shows/{show_id}                         -> update
/// DELETE /{channel_id}/shows/{show_id}                         -> delete
///
/// GET    /{channel_id}/shows/{show_id}/characters              -> list_by_show
/// POST   /{channel_id}/shows/{show_id}/characters              -> create
/// GET    /{channel_id}/shows/{show_id}/characters/{id}         -> get_by_id
/// PUT    /{channel_id}/shows/{show_id}/characters/{id}         -> update
/// DELETE /{channel_id}/shows/{show_id}/characters/{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    let character_routes = Router::new()
        .route("/", get(character::list_by_show).post(character::create))
        .route(
            "/{character_id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        );

    let show_routes = Router::new()
        .route("/", get(show::list_by_channel).post(show::create))
        .route(
            "/{show_id}",
            get(show::get_by_id).put(show::update).delete(show::delete),
        )
        .nest("/{show_id}/characters", character_routes);

    Router::new()
        .route("/", get(channel::list).post(channel::create))
        .route(
            "/{channel_id}",
            get(channel::get_by_id)
                .put(channel::update)
                .delete(channel::delete),
        )
        .nest("/{channel_id}/shows", show_routes)
}
