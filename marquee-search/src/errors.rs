//! Error types for movie search and metadata access.

use thiserror::Error;

/// Errors that can occur during search and metadata operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Metadata service answered with a non-success HTTP status.
    #[error("API request failed: {status} {status_text}")]
    RequestFailed {
        /// HTTP status code returned by the service
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// Network communication error occurred.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Response body could not be decoded.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// Search query was empty after trimming.
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// Dispatcher actor has shut down and no longer accepts commands.
    #[error("Search dispatcher has shut down")]
    DispatcherShutdown,
}
