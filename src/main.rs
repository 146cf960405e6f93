use std::env;

use axum::{
    Router,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

mod controllers;
mod models;
mod routers;
mod schema;
mod service;
mod store;

use routers::{
    create_song_route, delete_song_route, get_song_route, get_songs_route, health_check_route,
    root_route, update_song_route,
};
use service::SongsService;
use store::SongStore;

fn app(service: SongsService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        .route(
            "/songs",
            get(get_songs_route)
                .post(create_song_route)
                .put(update_song_route),
        )
        .route("/songs/{id}", get(get_song_route).delete(delete_song_route))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    // The store lives for the whole process; every request shares this one
    // instance through axum state.
    let service = SongsService::new(SongStore::new());

    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    info!("songs API listening on 0.0.0.0:{}", port);
    axum::serve(listener, app(service)).await.unwrap();
}
