//! Marquee Core - Movie catalog and profile foundations
//!
//! This crate provides the fundamental building blocks for movie discovery:
//! catalog data types with their wire mappings, durable profile storage,
//! render-pass supervision, and configuration management.

pub mod config;
pub mod media;
pub mod storage;
pub mod supervisor;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::MarqueeConfig;
pub use media::{MovieId, MovieSummary, PosterSize};
pub use storage::{Favorites, ProfileStore, StorageError};
pub use supervisor::RenderSupervisor;

/// Core errors that can bubble up from any Marquee subsystem.
///
/// High-level error types representing failures in core functionality.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Storage(e) => match e {
                StorageError::Encoding(_) => "Saved profile could not be read".to_string(),
                StorageError::Io(_) => "Profile could not be saved".to_string(),
            },
            MarqueeError::Configuration { reason } => {
                format!("Configuration error: {reason}")
            }
            MarqueeError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MarqueeError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
