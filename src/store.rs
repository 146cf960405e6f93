use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use uuid::Uuid;

use crate::models::{Song, UpdateSong};

/// Process-wide in-memory song collection. Constructed once in `main` and
/// handed to every request through axum state; insertion order is preserved
/// for the lifetime of the process.
#[derive(Clone)]
pub struct SongStore {
    songs: Arc<Mutex<Vec<Song>>>,
}

impl SongStore {
    pub fn new() -> Self {
        SongStore {
            songs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn songs(&self) -> Result<MutexGuard<'_, Vec<Song>>, anyhow::Error> {
        self.songs.lock().map_err(|_| anyhow!("song store lock poisoned"))
    }

    /// Appends the song to the sequence. Ids are generated by the caller and
    /// trusted to be unique.
    pub fn create(&self, song: Song) -> Result<(), anyhow::Error> {
        self.songs()?.push(song);
        Ok(())
    }

    /// Linear scan for the first song with a matching id.
    pub fn find(&self, id: Uuid) -> Result<Option<Song>, anyhow::Error> {
        Ok(self.songs()?.iter().find(|song| song.id == id).cloned())
    }

    /// Applies a partial update in place and returns the new state of the
    /// record. `updated_at` is refreshed on every hit, even when no field was
    /// supplied. Returns `None` when the id is unknown.
    pub fn update(&self, payload: UpdateSong) -> Result<Option<Song>, anyhow::Error> {
        let mut songs = self.songs()?;

        let Some(song) = songs.iter_mut().find(|song| song.id == payload.id) else {
            return Ok(None);
        };

        if let Some(name) = payload.name {
            song.name = name;
        }
        if let Some(description) = payload.description {
            song.description = description;
        }
        song.updated_at = chrono::Utc::now();

        Ok(Some(song.clone()))
    }

    /// Removes the first song with a matching id. The removed entry comes
    /// back as a single-element vec; an empty vec signals not-found.
    pub fn delete(&self, id: Uuid) -> Result<Vec<Song>, anyhow::Error> {
        let mut songs = self.songs()?;

        match songs.iter().position(|song| song.id == id) {
            Some(index) => Ok(vec![songs.remove(index)]),
            None => Ok(Vec::new()),
        }
    }

    /// Full sequence in insertion order.
    pub fn list(&self) -> Result<Vec<Song>, anyhow::Error> {
        Ok(self.songs()?.clone())
    }
}
