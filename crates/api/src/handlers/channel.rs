//! Handlers for the `/channels` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::validation::validate_channel;
use catalog_db::models::channel::{Channel, CreateChannel, UpdateChannel};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::{not_found, parse_id, vanished};
use crate::state::AppState;

/// Request body for creating or replacing a channel.
///
/// Missing fields deserialize as empty and are reported by validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChannelForm {
    pub name: String,
    pub description: String,
}

/// POST /api/v1/channels
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ChannelForm>,
) -> AppResult<(StatusCode, Json<Channel>)> {
    let fields = validate_channel(&input.name, &input.description)?;
    let repo = state.channels();
    let id = repo
        .create(&CreateChannel {
            channel_id: None,
            name: fields.name,
            description: fields.description,
        })
        .await?;
    let channel = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| vanished("Channel", id))?;
    Ok((StatusCode::CREATED, Json(channel)))
}

/// GET /api/v1/channels
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Channel>>> {
    let channels = state.channels().list().await?;
    Ok(Json(channels))
}

/// GET /api/v1/channels/{channel_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> AppResult<Json<Channel>> {
    let id = parse_id(&channel_id)?;
    let channel = state
        .channels()
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Channel", id))?;
    Ok(Json(channel))
}

/// PUT /api/v1/channels/{channel_id}
pub async fn update(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    Json(input): Json<ChannelForm>,
) -> AppResult<Json<Channel>> {
    let id = parse_id(&channel_id)?;
    let fields = validate_channel(&input.name, &input.description)?;
    let repo = state.channels();
    if repo.find_by_id(id).await?.is_none() {
        return Err(not_found("Channel", id));
    }
    let channel = repo
        .update(
            id,
            &UpdateChannel {
                name: fields.name,
                description: fields.description,
            },
        )
        .await?;
    Ok(Json(channel))
}

/// DELETE /api/v1/channels/{channel_id}
///
/// Removes the channel together with every show and character below it.
pub async fn delete(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&channel_id)?;
    let repo = state.channels();
    if repo.find_by_id(id).await?.is_none() {
        return Err(not_found("Channel", id));
    }
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
