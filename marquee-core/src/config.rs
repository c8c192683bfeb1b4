//! Centralized configuration for Marquee.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::path::PathBuf;
use std::time::Duration;

use crate::MarqueeError;

/// Central configuration for all Marquee components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
}

/// Movie-metadata service configuration.
///
/// Controls endpoints, authentication, and HTTP behavior for the
/// third-party metadata API and its image CDN.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the metadata service
    pub base_url: String,
    /// Base URL for the poster and profile image CDN
    pub image_base_url: String,
    /// API key sent with every request (None = unauthenticated)
    pub api_key: Option<String>,
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(30),
            user_agent: "marquee/0.1.0",
        }
    }
}

impl ApiConfig {
    /// Validates that both service URLs parse as absolute URLs.
    ///
    /// # Errors
    /// - `MarqueeError::Configuration` - If either URL is malformed
    pub fn validate(&self) -> Result<(), MarqueeError> {
        for raw in [&self.base_url, &self.image_base_url] {
            url::Url::parse(raw).map_err(|error| MarqueeError::Configuration {
                reason: format!("invalid URL '{raw}': {error}"),
            })?;
        }
        Ok(())
    }
}

/// Search dispatcher configuration.
///
/// Controls debounce timing and actor channel sizing.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet interval that must elapse before a pending query is dispatched
    pub quiet_interval: Duration,
    /// Command channel capacity for the dispatcher actor
    pub command_buffer: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quiet_interval: Duration::from_millis(500),
            command_buffer: 100,
        }
    }
}

/// Profile storage configuration.
///
/// Controls where the profile document lives and how it is written.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the profile document
    pub data_dir: PathBuf,
    /// File name of the profile document
    pub profile_file: &'static str,
    /// Temporary file suffix used for atomic writes
    pub temp_file_suffix: &'static str,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            profile_file: "profile.json",
            temp_file_suffix: ".tmp",
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // API configuration overrides
        if let Ok(api_key) = std::env::var("MARQUEE_API_KEY") {
            if !api_key.is_empty() {
                config.api.api_key = Some(api_key);
            }
        }

        if let Ok(base_url) = std::env::var("MARQUEE_API_BASE_URL") {
            config.api.base_url = base_url;
        }

        if let Ok(image_base_url) = std::env::var("MARQUEE_IMAGE_BASE_URL") {
            config.api.image_base_url = image_base_url;
        }

        // Search configuration overrides
        if let Ok(interval) = std::env::var("MARQUEE_QUIET_INTERVAL_MS") {
            if let Ok(millis) = interval.parse::<u64>() {
                config.search.quiet_interval = Duration::from_millis(millis);
            }
        }

        // Storage configuration overrides
        if let Ok(data_dir) = std::env::var("MARQUEE_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(data_dir);
        }

        config
    }

    /// Creates a configuration optimized for testing.
    ///
    /// Shortens the quiet interval so debounce tests settle quickly.
    pub fn for_testing() -> Self {
        Self {
            search: SearchConfig {
                quiet_interval: Duration::from_millis(50),
                ..SearchConfig::default()
            },
            ..Default::default()
        }
    }
}
