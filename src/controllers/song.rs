use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};
use uuid::Uuid;

use crate::models::{CreateSong, UpdateSong};
use crate::service::SongsService;

/// Maps service outcomes to HTTP responses. Every internal failure collapses
/// to a bare 500 after being logged; no error detail reaches the client.
pub struct SongsController;

impl SongsController {
    pub async fn create_song(service: &SongsService, payload: CreateSong) -> Response {
        match service.create_song(payload) {
            Ok(song) => {
                info!("created song {}", song.id);
                (StatusCode::CREATED, Json(song)).into_response()
            }
            Err(e) => {
                error!("failed to create song: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    pub async fn update_song(service: &SongsService, payload: UpdateSong) -> Response {
        match service.update_song(payload) {
            Ok(Some(song)) => {
                info!("updated song {}", song.id);
                (StatusCode::OK, Json(song)).into_response()
            }
            Ok(None) => StatusCode::NOT_FOUND.into_response(),
            Err(e) => {
                error!("failed to update song: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    pub async fn delete_song(service: &SongsService, id: Uuid) -> Response {
        match service.delete_song(id) {
            Ok(removed) if removed.is_empty() => StatusCode::NOT_FOUND.into_response(),
            Ok(_) => {
                info!("deleted song {}", id);
                StatusCode::NO_CONTENT.into_response()
            }
            Err(e) => {
                error!("failed to delete song {}: {}", id, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    pub async fn get_song(service: &SongsService, id: Uuid) -> Response {
        match service.get_song(id) {
            Ok(Some(song)) => (StatusCode::OK, Json(song)).into_response(),
            Ok(None) => StatusCode::NOT_FOUND.into_response(),
            Err(e) => {
                error!("failed to fetch song {}: {}", id, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    pub async fn get_songs(service: &SongsService) -> Response {
        match service.get_songs() {
            Ok(songs) => (StatusCode::OK, Json(songs)).into_response(),
            Err(e) => {
                error!("failed to list songs: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
