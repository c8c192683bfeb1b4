//! Command protocol for the search dispatcher actor.

use marquee_core::media::MoviePage;
use tokio::sync::oneshot;

use super::state::SearchState;
use crate::errors::SearchError;

/// Commands processed by the search dispatcher actor.
#[derive(Debug)]
pub enum SearchCommand {
    /// Schedules the query for dispatch once the quiet interval elapses.
    ///
    /// Supersedes any pending, not-yet-fired dispatch.
    Submit {
        /// Raw query text as typed by the user
        query: String,
    },

    /// Requests the current search state snapshot.
    CurrentState {
        /// Channel receiving the snapshot
        responder: oneshot::Sender<SearchState>,
    },

    /// Reports a settled outbound call back to the actor.
    ///
    /// Sent by the fetch task the actor spawned for a fired dispatch.
    DispatchSettled {
        /// Generation the dispatch was fired with
        generation: u64,
        /// Outcome of the outbound search call
        outcome: Result<MoviePage, SearchError>,
    },

    /// Stops the actor after acknowledging.
    Shutdown {
        /// Channel acknowledging the shutdown
        responder: oneshot::Sender<()>,
    },
}
