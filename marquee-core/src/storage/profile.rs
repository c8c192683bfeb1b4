//! Injected profile store backing favorites and navigation state.

use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use super::{Favorites, StorageError};
use crate::config::StorageConfig;
use crate::media::{MovieId, MovieSummary};

/// On-disk profile document.
///
/// Key names match the storage schema of earlier releases so existing
/// profiles keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileDocument {
    #[serde(rename = "favoriteMovies", default)]
    favorite_movies: Favorites,
    #[serde(rename = "lastVisitedPage", default)]
    last_visited_page: Option<String>,
}

/// Durable store for the user profile.
///
/// One instance is created at startup and handed to every consumer that
/// needs favorites or navigation state. Every mutation persists before
/// returning; reads are served from memory.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    temp_path: PathBuf,
    document: RwLock<ProfileDocument>,
    // Serializes disk writes so a later snapshot cannot be overwritten
    // by an earlier one.
    write_lock: Mutex<()>,
}

impl ProfileStore {
    /// Opens the profile store, rehydrating any existing document.
    ///
    /// A missing document yields an empty profile. A document that cannot
    /// be decoded is logged and replaced on the next write instead of
    /// failing startup.
    ///
    /// # Errors
    /// - `StorageError::Io` - Profile directory could not be created or read
    pub async fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.data_dir).await?;

        let path = config.data_dir.join(config.profile_file);
        let temp_path = config
            .data_dir
            .join(format!("{}{}", config.profile_file, config.temp_file_suffix));

        let document = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(document) => document,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        "Discarding undecodable profile document: {error}"
                    );
                    ProfileDocument::default()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                ProfileDocument::default()
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self {
            path,
            temp_path,
            document: RwLock::new(document),
            write_lock: Mutex::new(()),
        })
    }

    /// Current favorites snapshot.
    pub fn favorites(&self) -> Favorites {
        self.document.read().favorite_movies.clone()
    }

    /// Checks whether the movie id is in the favorites set.
    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.document.read().favorite_movies.contains(id)
    }

    /// Toggles the movie in the favorites set and persists the change.
    ///
    /// Returns true when the movie was added, false when removed.
    ///
    /// # Errors
    /// - `StorageError::Encoding` - Profile document could not be serialized
    /// - `StorageError::Io` - Profile document could not be written
    pub async fn toggle_favorite(&self, movie: MovieSummary) -> Result<bool, StorageError> {
        let added = self.document.write().favorite_movies.toggle(movie);
        self.persist_current().await?;
        Ok(added)
    }

    /// Last route recorded by [`record_visit`](Self::record_visit), if any.
    pub fn last_visited_page(&self) -> Option<String> {
        self.document.read().last_visited_page.clone()
    }

    /// Records the route the user last visited and persists it.
    ///
    /// # Errors
    /// - `StorageError::Encoding` - Profile document could not be serialized
    /// - `StorageError::Io` - Profile document could not be written
    pub async fn record_visit(&self, route: &str) -> Result<(), StorageError> {
        self.document.write().last_visited_page = Some(route.to_string());
        self.persist_current().await
    }

    /// Writes the current document atomically: temp file first, then rename.
    async fn persist_current(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let bytes = {
            let document = self.document.read();
            serde_json::to_vec_pretty(&*document)?
        };

        fs::write(&self.temp_path, &bytes).await?;
        fs::rename(&self.temp_path, &self.path).await?;
        Ok(())
    }
}
