//! HTTP-level integration tests for the channel / show / character API.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use catalog_db::StoreHandle;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::{json, Value};

const MISSING_ID: &str = "00112233445566778899aabbccddeeff";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_channel(store: &StoreHandle, name: &str) -> Value {
    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/v1/channels",
        json!({"name": name, "description": format!("{name} description")}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_show(store: &StoreHandle, channel_id: &str, title: &str) -> Value {
    let response = post_json(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{channel_id}/shows"),
        json!({"title": title, "description": "A show", "year": 2023}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_character(store: &StoreHandle, channel_id: &str, show_id: &str, name: &str) -> Value {
    let response = post_json(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{channel_id}/shows/{show_id}/characters"),
        json!({"name": name, "role": "Lead", "description": "A character"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn id_of(json: &Value) -> String {
    json["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_channel_returns_201() {
    let store = common::test_store();
    let json = create_channel(&store, "Action Network").await;

    assert_eq!(json["name"], "Action Network");
    let id = id_of(&json);
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert!(json["created_at"].is_string());
    assert_eq!(json["created_at"], json["updated_at"]);
}

#[tokio::test]
async fn test_create_channel_trims_fields() {
    let store = common::test_store();
    let response = post_json(
        common::build_test_app(store),
        "/api/v1/channels",
        json!({"name": "  Padded  ", "description": " text "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Padded");
    assert_eq!(json["description"], "text");
}

#[tokio::test]
async fn test_create_channel_validation_errors() {
    let store = common::test_store();

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/v1/channels",
        json!({"name": "   ", "description": "d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name is required");

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/v1/channels",
        json!({"name": "x".repeat(101), "description": "d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/v1/channels",
        json!({"name": "No description"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(common::build_test_app(store), "/api/v1/channels").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_channel_by_id() {
    let store = common::test_store();
    let created = create_channel(&store, "Get Me").await;
    let id = id_of(&created);

    let response = get(
        common::build_test_app(store),
        &format!("/api/v1/channels/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_get_nonexistent_channel_returns_404() {
    let response = get(
        common::build_test_app(common::test_store()),
        &format!("/api/v1/channels/{MISSING_ID}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_channel_id_returns_400() {
    for bad in ["zz", "abc", "0011"] {
        let response = get(
            common::build_test_app(common::test_store()),
            &format!("/api/v1/channels/{bad}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(body_json(response).await["code"], "MALFORMED_IDENTIFIER");
    }
}

#[tokio::test]
async fn test_list_channels_sorted() {
    let store = common::test_store();
    create_channel(&store, "Zeta").await;
    create_channel(&store, "Alpha").await;

    let response = get(common::build_test_app(store), "/api/v1/channels").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Alpha", "Zeta"]);
}

#[tokio::test]
async fn test_update_channel() {
    let store = common::test_store();
    let created = create_channel(&store, "Original").await;
    let id = id_of(&created);

    let response = put_json(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{id}"),
        json!({"name": "Updated", "description": "New text"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    assert_eq!(json["id"], created["id"]);
    assert_eq!(json["created_at"], created["created_at"]);
    assert_ne!(json["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn test_update_nonexistent_channel_returns_404() {
    let store = common::test_store();
    let response = put_json(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{MISSING_ID}"),
        json!({"name": "Ghost", "description": "Never created"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(store), "/api/v1/channels").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_channel_cascades() {
    let store = common::test_store();
    let channel_id = id_of(&create_channel(&store, "Epic Tales").await);
    let show_id = id_of(&create_show(&store, &channel_id, "Kingdom of Ash").await);
    create_character(&store, &channel_id, &show_id, "Queen Elara").await;

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{channel_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{channel_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for uri in ["/api/v1/shows", "/api/v1/characters"] {
        let response = get(common::build_test_app(store.clone()), uri).await;
        assert!(body_json(response).await.as_array().unwrap().is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn test_delete_nonexistent_channel_returns_404() {
    let response = delete(
        common::build_test_app(common::test_store()),
        &format!("/api/v1/channels/{MISSING_ID}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Shows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_show_crud() {
    let store = common::test_store();
    let channel_id = id_of(&create_channel(&store, "Future Vision").await);
    let show = create_show(&store, &channel_id, "Starship Odyssey").await;
    let show_id = id_of(&show);
    assert_eq!(show["channel_id"], channel_id.as_str());
    assert_eq!(show["year"], 2023);

    let uri = format!("/api/v1/channels/{channel_id}/shows/{show_id}");

    let response = get(common::build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, show);

    let response = put_json(
        common::build_test_app(store.clone()),
        &uri,
        json!({"title": "Starship Odyssey II", "description": "Sequel", "year": "2025"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Starship Odyssey II");
    assert_eq!(json["year"], 2025);

    let response = delete(common::build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        common::build_test_app(store),
        &format!("/api/v1/channels/{channel_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_show_under_missing_channel_returns_404() {
    let store = common::test_store();
    let response = post_json(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{MISSING_ID}/shows"),
        json!({"title": "Orphan", "description": "No parent", "year": 2020}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(store), "/api/v1/shows").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_show_year_validation() {
    let store = common::test_store();
    let channel_id = id_of(&create_channel(&store, "Historical Hub").await);
    let uri = format!("/api/v1/channels/{channel_id}/shows");

    for year in [json!(1899), json!(2031), json!("soon"), json!("")] {
        let response = post_json(
            common::build_test_app(store.clone()),
            &uri,
            json!({"title": "Crown", "description": "Royal", "year": year}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{year}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let response = post_json(
        common::build_test_app(store),
        &uri,
        json!({"title": "Crown", "description": "Royal", "year": " 1900 "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_shows_by_channel() {
    let store = common::test_store();
    let scifi = id_of(&create_channel(&store, "Future Vision").await);
    let drama = id_of(&create_channel(&store, "Drama District").await);
    create_show(&store, &scifi, "Starship Odyssey").await;
    create_show(&store, &scifi, "Neural Link").await;
    create_show(&store, &drama, "Broken Trust").await;

    let response = get(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{scifi}/shows"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let shows = json.as_array().unwrap();
    assert_eq!(shows.len(), 2);
    assert!(shows.iter().all(|s| s["channel_id"] == scifi.as_str()));

    let response = get(common::build_test_app(store), "/api/v1/shows").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_shows_of_missing_channel_is_empty() {
    let response = get(
        common::build_test_app(common::test_store()),
        &format!("/api/v1/channels/{MISSING_ID}/shows"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_show_under_wrong_channel_returns_404() {
    let store = common::test_store();
    let owner = id_of(&create_channel(&store, "Owner").await);
    let other = id_of(&create_channel(&store, "Other").await);
    let show_id = id_of(&create_show(&store, &owner, "Mine").await);

    let response = get(
        common::build_test_app(store),
        &format!("/api/v1/channels/{other}/shows/{show_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_character_crud() {
    let store = common::test_store();
    let channel_id = id_of(&create_channel(&store, "Action Network").await);
    let show_id = id_of(&create_show(&store, &channel_id, "Strike Force").await);
    let character = create_character(&store, &channel_id, &show_id, "Jack Reeves").await;
    let character_id = id_of(&character);
    assert_eq!(character["show_id"], show_id.as_str());
    assert_eq!(character["channel_id"], channel_id.as_str());

    let uri = format!("/api/v1/channels/{channel_id}/shows/{show_id}/characters/{character_id}");

    let response = get(common::build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, character);

    let response = put_json(
        common::build_test_app(store.clone()),
        &uri,
        json!({"name": "Jack Reeves", "role": "Commander", "description": "Promoted"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], "Commander");

    let response = get(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{channel_id}/shows/{show_id}/characters"),
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = delete(common::build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The show survives its character.
    let response = get(
        common::build_test_app(store),
        &format!("/api/v1/channels/{channel_id}/shows/{show_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_character_under_missing_show_returns_404() {
    let store = common::test_store();
    let channel_id = id_of(&create_channel(&store, "Bright Comedy").await);

    let response = post_json(
        common::build_test_app(store),
        &format!("/api/v1/channels/{channel_id}/shows/{MISSING_ID}/characters"),
        json!({"name": "Emma", "role": "Barista", "description": "Aspiring novelist"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_character_validation_error() {
    let store = common::test_store();
    let channel_id = id_of(&create_channel(&store, "Bright Comedy").await);
    let show_id = id_of(&create_show(&store, &channel_id, "Coffee Shop Chronicles").await);

    let response = post_json(
        common::build_test_app(store),
        &format!("/api/v1/channels/{channel_id}/shows/{show_id}/characters"),
        json!({"name": "Emma", "role": "", "description": "Aspiring novelist"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "role is required");
}

#[tokio::test]
async fn test_delete_show_removes_its_characters_only() {
    let store = common::test_store();
    let channel_id = id_of(&create_channel(&store, "Action Network").await);
    let doomed = id_of(&create_show(&store, &channel_id, "Strike Force").await);
    let kept = id_of(&create_show(&store, &channel_id, "Zero Hour").await);
    create_character(&store, &channel_id, &doomed, "Jack Reeves").await;
    create_character(&store, &channel_id, &kept, "Agent Cole").await;

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/api/v1/channels/{channel_id}/shows/{doomed}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(store.clone()), "/api/v1/characters").await;
    let json = body_json(response).await;
    let characters = json.as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["name"], "Agent Cole");

    let response = get(common::build_test_app(store), "/api/v1/shows").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}
