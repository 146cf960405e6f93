use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();
        Song {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /songs`. Both fields are validated as required non-empty
/// strings before this is constructed.
#[derive(Deserialize, Clone, Debug)]
pub struct CreateSong {
    pub name: String,
    pub description: String,
}

/// Body of `PUT /songs`. Absent fields leave the stored values untouched.
#[derive(Deserialize, Clone, Debug)]
pub struct UpdateSong {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}
