pub mod song;
pub use song::{CreateSong, Song, UpdateSong};
