use uuid::Uuid;

use crate::models::{CreateSong, Song, UpdateSong};
use crate::store::SongStore;

/// Pass-through layer in front of the store. Carries no contract of its own;
/// it is the seam a persistence-backed implementation would slot into.
/// Creation lives here because the store only appends: the service assigns
/// the id and timestamps, then hands the record over.
#[derive(Clone)]
pub struct SongsService {
    store: SongStore,
}

impl SongsService {
    pub fn new(store: SongStore) -> Self {
        SongsService { store }
    }

    pub fn create_song(&self, payload: CreateSong) -> Result<Song, anyhow::Error> {
        let song = Song::new(payload.name, payload.description);
        self.store.create(song.clone())?;
        Ok(song)
    }

    pub fn update_song(&self, payload: UpdateSong) -> Result<Option<Song>, anyhow::Error> {
        self.store.update(payload)
    }

    pub fn delete_song(&self, id: Uuid) -> Result<Vec<Song>, anyhow::Error> {
        self.store.delete(id)
    }

    pub fn get_song(&self, id: Uuid) -> Result<Option<Song>, anyhow::Error> {
        self.store.find(id)
    }

    pub fn get_songs(&self) -> Result<Vec<Song>, anyhow::Error> {
        self.store.list()
    }
}
