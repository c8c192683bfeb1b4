//! Handle for communicating with the search dispatcher actor.

use tokio::sync::{mpsc, oneshot, watch};

use super::commands::SearchCommand;
use super::state::SearchState;
use crate::errors::SearchError;

/// Handle for communicating with the search dispatcher actor.
///
/// Provides an ergonomic async API for submitting queries and observing
/// search state. It can be cloned and shared across tasks safely; every
/// clone addresses the same dispatcher.
#[derive(Debug, Clone)]
pub struct SearchDispatcherHandle {
    sender: mpsc::Sender<SearchCommand>,
    state: watch::Receiver<SearchState>,
}

impl SearchDispatcherHandle {
    /// Creates a new handle from the actor's channel endpoints.
    pub(crate) fn new(
        sender: mpsc::Sender<SearchCommand>,
        state: watch::Receiver<SearchState>,
    ) -> Self {
        Self { sender, state }
    }

    /// Submits the current query text to the dispatcher.
    ///
    /// Scheduling semantics are described on
    /// [`spawn_search_dispatcher`](super::spawn_search_dispatcher): the call
    /// returns as soon as the command is queued, well before any dispatch
    /// fires.
    ///
    /// # Errors
    /// - `SearchError::DispatcherShutdown` - Actor is no longer running
    pub async fn submit(&self, query: impl Into<String>) -> Result<(), SearchError> {
        self.sender
            .send(SearchCommand::Submit {
                query: query.into(),
            })
            .await
            .map_err(|_| SearchError::DispatcherShutdown)
    }

    /// Returns the authoritative current search state.
    ///
    /// # Errors
    /// - `SearchError::DispatcherShutdown` - Actor is no longer running
    pub async fn current_state(&self) -> Result<SearchState, SearchError> {
        let (responder, rx) = oneshot::channel();
        let cmd = SearchCommand::CurrentState { responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| SearchError::DispatcherShutdown)?;

        rx.await.map_err(|_| SearchError::DispatcherShutdown)
    }

    /// Returns a watch receiver observing every published state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.clone()
    }

    /// Shuts down the dispatcher actor gracefully.
    ///
    /// After this call, all subsequent operations will return
    /// `SearchError::DispatcherShutdown`.
    ///
    /// # Errors
    /// - `SearchError::DispatcherShutdown` - Actor already stopped
    pub async fn shutdown(&self) -> Result<(), SearchError> {
        let (responder, rx) = oneshot::channel();
        let cmd = SearchCommand::Shutdown { responder };

        self.sender
            .send(cmd)
            .await
            .map_err(|_| SearchError::DispatcherShutdown)?;

        rx.await.map_err(|_| SearchError::DispatcherShutdown)
    }

    /// Checks if the dispatcher actor is still running.
    ///
    /// Returns true if the command channel is still open, indicating the
    /// actor is accepting commands.
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }
}
