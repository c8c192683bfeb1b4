//! Debounced query dispatch for type-ahead movie search.
//!
//! Implements the actor model: handles submit query strings over a command
//! channel, while a spawned loop owns the pending deadline, the dispatch
//! generation counter, and the visible search state. Rapid submissions
//! collapse into a single outbound call per quiet period, and completions
//! from superseded dispatches are discarded.

mod actor;
mod commands;
mod handle;
mod state;

pub use actor::spawn_search_dispatcher;
pub use commands::SearchCommand;
pub use handle::SearchDispatcherHandle;
pub use state::SearchState;
