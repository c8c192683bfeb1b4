//! Durable profile storage.
//!
//! Persists the user's favorites set and last visited route as a single
//! JSON document, written atomically and rehydrated at startup. Consumers
//! receive one [`ProfileStore`] instance at startup instead of reaching
//! into ambient storage.

mod favorites;
mod profile;

pub use favorites::Favorites;
pub use profile::ProfileStore;

use thiserror::Error;

/// Errors that can occur during profile storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Profile document could not be serialized or deserialized
    #[error("Profile encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Standard I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
