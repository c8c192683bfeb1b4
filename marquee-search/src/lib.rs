//! Marquee Search - Movie search and discovery

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Provides debounced keyword search over a third-party movie-metadata API
//! together with typed access to listing, detail, cast, and review data.

pub mod client;
pub mod dispatcher;
pub mod errors;

// Re-export main types
pub use client::{MetadataProvider, TmdbClient};
pub use dispatcher::{SearchDispatcherHandle, SearchState, spawn_search_dispatcher};
pub use errors::SearchError;

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
