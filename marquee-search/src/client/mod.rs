//! Metadata providers for movie discovery.
//!
//! The production provider speaks the TMDB v3 wire format; tests implement
//! the same trait with scripted data.

use async_trait::async_trait;
use marquee_core::media::{Credits, MovieDetails, MovieId, MoviePage, ReviewPage};

use crate::errors::SearchError;

mod mock;
mod tmdb;

#[cfg(test)]
pub(crate) use mock::MockProvider;
pub use tmdb::TmdbClient;

/// Trait for movie metadata providers.
///
/// Implementations expose the listing, search, detail, cast, and review
/// operations of the metadata service through different backends.
#[async_trait]
pub trait MetadataProvider: Send + Sync + std::fmt::Debug {
    /// Fetches the popular-movies listing for `page`.
    ///
    /// # Errors
    /// - `SearchError::RequestFailed` - Service answered with a non-success status
    /// - `SearchError::Network` - Network connectivity issues
    /// - `SearchError::Parse` - Response body could not be decoded
    async fn popular_movies(&self, page: u32) -> Result<MoviePage, SearchError>;

    /// Searches movies by keyword, trimmed before dispatch.
    ///
    /// # Errors
    /// - `SearchError::EmptyQuery` - Query is empty after trimming
    /// - `SearchError::RequestFailed` - Service answered with a non-success status
    /// - `SearchError::Network` - Network connectivity issues
    /// - `SearchError::Parse` - Response body could not be decoded
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, SearchError>;

    /// Fetches detailed information for a movie.
    ///
    /// # Errors
    /// - `SearchError::RequestFailed` - Service answered with a non-success status
    /// - `SearchError::Network` - Network connectivity issues
    /// - `SearchError::Parse` - Response body could not be decoded
    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails, SearchError>;

    /// Fetches cast credits for a movie.
    ///
    /// # Errors
    /// - `SearchError::RequestFailed` - Service answered with a non-success status
    /// - `SearchError::Network` - Network connectivity issues
    /// - `SearchError::Parse` - Response body could not be decoded
    async fn movie_credits(&self, id: MovieId) -> Result<Credits, SearchError>;

    /// Fetches reviews for a movie.
    ///
    /// # Errors
    /// - `SearchError::RequestFailed` - Service answered with a non-success status
    /// - `SearchError::Network` - Network connectivity issues
    /// - `SearchError::Parse` - Response body could not be decoded
    async fn movie_reviews(&self, id: MovieId, page: u32) -> Result<ReviewPage, SearchError>;
}
