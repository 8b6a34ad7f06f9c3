//! Handlers for shows, nested under `/channels/{channel_id}/shows`, plus the
//! flat `/shows` listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::validation::validate_show;
use catalog_db::key_path::ShowKey;
use catalog_db::models::show::{CreateShow, Show, UpdateShow};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::{not_found, parse_id, vanished};
use crate::state::AppState;

/// A year as submitted: either a JSON number or the text of a form field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Number(i64),
    Text(String),
}

impl Default for YearInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl YearInput {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Request body for creating or replacing a show.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub title: String,
    pub description: String,
    pub year: YearInput,
}

fn show_key(channel_id: &str, show_id: &str) -> AppResult<ShowKey> {
    Ok(ShowKey::new(parse_id(channel_id)?, parse_id(show_id)?))
}

/// POST /api/v1/channels/{channel_id}/shows
pub async fn create(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    Json(input): Json<ShowForm>,
) -> AppResult<(StatusCode, Json<Show>)> {
    let channel_id = parse_id(&channel_id)?;
    let fields = validate_show(&input.title, &input.description, &input.year.as_text())?;
    if state.channels().find_by_id(channel_id).await?.is_none() {
        return Err(not_found("Channel", channel_id));
    }

    let repo = state.shows();
    let show_id = repo
        .create(
            channel_id,
            &CreateShow {
                show_id: None,
                title: fields.title,
                description: fields.description,
                year: fields.year,
            },
        )
        .await?;
    let show = repo
        .find(&ShowKey::new(channel_id, show_id))
        .await?
        .ok_or_else(|| vanished("Show", show_id))?;
    Ok((StatusCode::CREATED, Json(show)))
}

/// GET /api/v1/shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Show>>> {
    let shows = state.shows().list().await?;
    Ok(Json(shows))
}

/// GET /api/v1/channels/{channel_id}/shows
pub async fn list_by_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> AppResult<Json<Vec<Show>>> {
    let channel_id = parse_id(&channel_id)?;
    let shows = state.shows().list_by_channel(channel_id).await?;
    Ok(Json(shows))
}

/// GET /api/v1/channels/{channel_id}/shows/{show_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((channel_id, show_id)): Path<(String, String)>,
) -> AppResult<Json<Show>> {
    let key = show_key(&channel_id, &show_id)?;
    let show = state
        .shows()
        .find(&key)
        .await?
        .ok_or_else(|| not_found("Show", key.show_id))?;
    Ok(Json(show))
}

/// PUT /api/v1/channels/{channel_id}/shows/{show_id}
pub async fn update(
    State(state): State<AppState>,
    Path((channel_id, show_id)): Path<(String, String)>,
    Json(input): Json<ShowForm>,
) -> AppResult<Json<Show>> {
    let key = show_key(&channel_id, &show_id)?;
    let fields = validate_show(&input.title, &input.description, &input.year.as_text())?;
    let repo = state.shows();
    if repo.find(&key).await?.is_none() {
        return Err(not_found("Show", key.show_id));
    }
    let show = repo
        .update(
            &key,
            &UpdateShow {
                title: fields.title,
                description: fields.description,
                year: fields.year,
            },
        )
        .await?;
    Ok(Json(show))
}

/// DELETE /api/v1/channels/{channel_id}/shows/{show_id}
///
/// Removes the show and all of its characters.
pub async fn delete(
    State(state): State<AppState>,
    Path((channel_id, show_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let key = show_key(&channel_id, &show_id)?;
    let repo = state.shows();
    if repo.find(&key).await?.is_none() {
        return Err(not_found("Show", key.show_id));
    }
    repo.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
