//! Observable state for the search dispatcher.

use marquee_core::media::MovieSummary;
use serde::{Deserialize, Serialize};

/// Visible search state, replaced wholesale as dispatches settle.
///
/// Results are never merged across dispatches; each applied completion
/// overwrites the previous result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchState {
    /// Result set matching the most recent applied dispatch
    pub results: Vec<MovieSummary>,
    /// Whether a dispatch is currently in flight
    pub is_loading: bool,
    /// Whether a search has been performed for the current input
    pub has_searched: bool,
    /// User-readable message from the last failed dispatch
    pub error: Option<String>,
}

impl SearchState {
    /// Whether the idle "start your search" prompt should be shown.
    pub fn shows_prompt(&self) -> bool {
        !self.has_searched && !self.is_loading && self.error.is_none()
    }
}
