//! Handlers for characters, nested under
//! `/channels/{channel_id}/shows/{show_id}/characters`, plus the flat
//! `/characters` listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::validation::validate_character;
use catalog_db::key_path::{CharacterKey, ShowKey};
use catalog_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::{not_found, parse_id, vanished};
use crate::state::AppState;

/// Request body for creating or replacing a character.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CharacterForm {
    pub name: String,
    pub role: String,
    pub description: String,
}

fn character_key(channel_id: &str, show_id: &str, character_id: &str) -> AppResult<CharacterKey> {
    Ok(CharacterKey::new(
        parse_id(channel_id)?,
        parse_id(show_id)?,
        parse_id(character_id)?,
    ))
}

/// POST /api/v1/channels/{channel_id}/shows/{show_id}/characters
pub async fn create(
    State(state): State<AppState>,
    Path((channel_id, show_id)): Path<(String, String)>,
    Json(input): Json<CharacterForm>,
) -> AppResult<(StatusCode, Json<Character>)> {
    let show = ShowKey::new(parse_id(&channel_id)?, parse_id(&show_id)?);
    let fields = validate_character(&input.name, &input.role, &input.description)?;
    if state.shows().find(&show).await?.is_none() {
        return Err(not_found("Show", show.show_id));
    }

    let repo = state.characters();
    let character_id = repo
        .create(
            &show,
            &CreateCharacter {
                character_id: None,
                name: fields.name,
                role: fields.role,
                description: fields.description,
            },
        )
        .await?;
    let character = repo
        .find(&CharacterKey::new(show.channel_id, show.show_id, character_id))
        .await?
        .ok_or_else(|| vanished("Character", character_id))?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = state.characters().list().await?;
    Ok(Json(characters))
}

/// GET /api/v1/channels/{channel_id}/shows/{show_id}/characters
pub async fn list_by_show(
    State(state): State<AppState>,
    Path((channel_id, show_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<Character>>> {
    let show = ShowKey::new(parse_id(&channel_id)?, parse_id(&show_id)?);
    let characters = state.characters().list_by_show(&show).await?;
    Ok(Json(characters))
}

/// GET /api/v1/channels/{channel_id}/shows/{show_id}/characters/{character_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((channel_id, show_id, character_id)): Path<(String, String, String)>,
) -> AppResult<Json<Character>> {
    let key = character_key(&channel_id, &show_id, &character_id)?;
    let character = state
        .characters()
        .find(&key)
        .await?
        .ok_or_else(|| not_found("Character", key.character_id))?;
    Ok(Json(character))
}

/// PUT /api/v1/channels/{channel_id}/shows/{show_id}/characters/{character_id}
pub async fn update(
    State(state): State<AppState>,
    Path((channel_id, show_id, character_id)): Path<(String, String, String)>,
    Json(input): Json<CharacterForm>,
) -> AppResult<Json<Character>> {
    let key = character_key(&channel_id, &show_id, &character_id)?;
    let fields = validate_character(&input.name, &input.role, &input.description)?;
    let repo = state.characters();
    if repo.find(&key).await?.is_none() {
        return Err(not_found("Character", key.character_id));
    }
    let character = repo
        .update(
            &key,
            &UpdateCharacter {
                name: fields.name,
                role: fields.role,
                description: fields.description,
            },
        )
        .await?;
    Ok(Json(character))
}

/// DELETE /api/v1/channels/{channel_id}/shows/{show_id}/characters/{character_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((channel_id, show_id, character_id)): Path<(String, String, String)>,
) -> AppResult<StatusCode> {
    let key = character_key(&channel_id, &show_id, &character_id)?;
    let repo = state.characters();
    if repo.find(&key).await?.is_none() {
        return Err(not_found("Character", key.character_id));
    }
    repo.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
