//! Actor implementation for the search dispatcher.

use std::sync::Arc;
use std::time::Duration;

use marquee_core::config::SearchConfig;
use marquee_core::media::MoviePage;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep_until};

use super::commands::SearchCommand;
use super::handle::SearchDispatcherHandle;
use super::state::SearchState;
use crate::client::MetadataProvider;
use crate::errors::SearchError;

// Park interval for the timer branch while no dispatch is pending. The
// branch is disabled in that case; this only keeps the disabled future
// from computing a deadline in the past.
const IDLE_PARK: Duration = Duration::from_secs(3600);

/// Spawns the search dispatcher actor and returns its handle.
///
/// The actor owns all visible search state and processes commands
/// sequentially. Submissions within one quiet interval collapse into a
/// single outbound call carrying the most recent query; a completion from
/// a superseded dispatch is discarded by generation, so the newest query
/// wins regardless of network reordering.
pub fn spawn_search_dispatcher<P>(config: SearchConfig, provider: P) -> SearchDispatcherHandle
where
    P: MetadataProvider + 'static,
{
    let (sender, receiver) = mpsc::channel(config.command_buffer);
    let (settled_sender, settled_receiver) = mpsc::unbounded_channel();
    let (state_sender, state_receiver) = watch::channel(SearchState::default());

    let dispatcher = SearchDispatcher {
        quiet_interval: config.quiet_interval,
        provider: Arc::new(provider),
        settled_sender,
        state_sender,
        state: SearchState::default(),
        pending: None,
        generation: 0,
    };

    tokio::spawn(async move {
        run_actor_loop(dispatcher, receiver, settled_receiver).await;
    });

    SearchDispatcherHandle::new(sender, state_receiver)
}

/// Query waiting for its quiet interval to elapse.
#[derive(Debug)]
struct PendingDispatch {
    query: String,
    deadline: Instant,
}

struct SearchDispatcher<P> {
    quiet_interval: Duration,
    provider: Arc<P>,
    settled_sender: mpsc::UnboundedSender<SearchCommand>,
    state_sender: watch::Sender<SearchState>,
    state: SearchState,
    pending: Option<PendingDispatch>,
    generation: u64,
}

/// Runs the main actor message processing loop.
///
/// Commands and fetch completions are processed one by one in order, so
/// all state transitions are serialized without locks. The loop continues
/// until the command channel is closed or a shutdown command is received.
async fn run_actor_loop<P>(
    mut dispatcher: SearchDispatcher<P>,
    mut receiver: mpsc::Receiver<SearchCommand>,
    mut settled_receiver: mpsc::UnboundedReceiver<SearchCommand>,
) where
    P: MetadataProvider + 'static,
{
    tracing::debug!("Search dispatcher actor started");

    loop {
        let deadline = dispatcher.pending.as_ref().map(|pending| pending.deadline);

        tokio::select! {
            Some(command) = receiver.recv() => {
                if !dispatcher.handle_command(command) {
                    break;
                }
            }
            Some(command) = settled_receiver.recv() => {
                if !dispatcher.handle_command(command) {
                    break;
                }
            }
            () = sleep_until(deadline.unwrap_or_else(|| Instant::now() + IDLE_PARK)),
                if deadline.is_some() =>
            {
                dispatcher.fire_pending();
            }
            else => break,
        }
    }

    tracing::debug!("Search dispatcher actor stopped");
}

impl<P> SearchDispatcher<P>
where
    P: MetadataProvider + 'static,
{
    /// Handles a single command.
    /// Returns true to continue processing, false to shutdown.
    fn handle_command(&mut self, command: SearchCommand) -> bool {
        match command {
            SearchCommand::Submit { query } => {
                self.handle_submit(&query);
                true
            }

            SearchCommand::CurrentState { responder } => {
                let _ = responder.send(self.state.clone());
                true
            }

            SearchCommand::DispatchSettled {
                generation,
                outcome,
            } => {
                self.apply_settled(generation, outcome);
                true
            }

            SearchCommand::Shutdown { responder } => {
                let _ = responder.send(());
                false
            }
        }
    }

    /// Rearms the pending deadline for a non-empty query, or clears all
    /// search state for an empty one.
    fn handle_submit(&mut self, query: &str) {
        let trimmed = query.trim();

        if trimmed.is_empty() {
            // Clearing the input supersedes the pending deadline and any
            // in-flight dispatch.
            self.pending = None;
            self.generation += 1;
            self.state = SearchState::default();
            self.publish();
            return;
        }

        self.pending = Some(PendingDispatch {
            query: trimmed.to_string(),
            deadline: Instant::now() + self.quiet_interval,
        });
    }

    /// Fires the pending dispatch: one outbound call for the latest query.
    fn fire_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        self.generation += 1;
        let generation = self.generation;

        self.state.is_loading = true;
        self.state.error = None;
        self.publish();

        tracing::debug!(query = %pending.query, generation, "Dispatching search");

        let provider = Arc::clone(&self.provider);
        let settled = self.settled_sender.clone();
        tokio::spawn(async move {
            let outcome = provider.search_movies(&pending.query, 1).await;
            let _ = settled.send(SearchCommand::DispatchSettled {
                generation,
                outcome,
            });
        });
    }

    /// Applies a settled dispatch unless a newer one has fired since.
    fn apply_settled(&mut self, generation: u64, outcome: Result<MoviePage, SearchError>) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "Discarding superseded search completion"
            );
            return;
        }

        match outcome {
            Ok(page) => {
                self.state.results = page.results;
                self.state.has_searched = true;
                self.state.error = None;
            }
            Err(error) => {
                tracing::warn!("Search dispatch failed: {error}");
                self.state.results = Vec::new();
                self.state.has_searched = false;
                self.state.error = Some(error.to_string());
            }
        }

        self.state.is_loading = false;
        self.publish();
    }

    fn publish(&self) {
        let _ = self.state_sender.send(self.state.clone());
    }
}
