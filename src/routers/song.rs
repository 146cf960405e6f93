use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::controllers::SongsController;
use crate::schema;
use crate::service::SongsService;

fn validation_errors(errors: Vec<String>) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors }))).into_response()
}

/// `GET /songs` — the full list in creation order; 200 even when empty.
pub async fn get_songs_route(State(service): State<SongsService>) -> Response {
    SongsController::get_songs(&service).await
}

/// `GET /songs/{id}` — 200 with the song, 404 if unknown, 422 if the path
/// segment is not a UUID.
pub async fn get_song_route(
    State(service): State<SongsService>,
    Path(id): Path<String>,
) -> Response {
    match schema::validate_path_id(&id) {
        Ok(id) => SongsController::get_song(&service, id).await,
        Err(errors) => validation_errors(errors),
    }
}

/// `POST /songs` — 201 with the created song, 422 with the collected
/// validation errors.
pub async fn create_song_route(
    State(service): State<SongsService>,
    Json(body): Json<Value>,
) -> Response {
    match schema::validate_create(&body) {
        Ok(payload) => SongsController::create_song(&service, payload).await,
        Err(errors) => validation_errors(errors),
    }
}

/// `PUT /songs` — partial update addressed by the `id` in the body; 200 with
/// the new state, 404 if unknown, 422 on validation failure.
pub async fn update_song_route(
    State(service): State<SongsService>,
    Json(body): Json<Value>,
) -> Response {
    match schema::validate_update(&body) {
        Ok(payload) => SongsController::update_song(&service, payload).await,
        Err(errors) => validation_errors(errors),
    }
}

/// `DELETE /songs/{id}` — 204 empty on success, 404 if unknown, 422 if the
/// path segment is not a UUID.
pub async fn delete_song_route(
    State(service): State<SongsService>,
    Path(id): Path<String>,
) -> Response {
    match schema::validate_path_id(&id) {
        Ok(id) => SongsController::delete_song(&service, id).await,
        Err(errors) => validation_errors(errors),
    }
}
