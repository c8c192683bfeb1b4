//! Integration tests for the search dispatcher.
//!
//! These tests verify the complete debounced search workflow using the
//! public SearchDispatcherHandle API, including supersession, failure
//! surfacing, and shutdown behavior.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use marquee_core::config::SearchConfig;
use marquee_core::media::{Credits, MovieDetails, MovieId, MoviePage, MovieSummary, ReviewPage};
use marquee_search::client::MetadataProvider;
use marquee_search::dispatcher::spawn_search_dispatcher;
use marquee_search::errors::SearchError;
use tokio::task::yield_now;
use tokio::time::advance;
use tokio_test::{assert_err, assert_ok};

/// Scripted provider answering searches from a queue of outcomes.
#[derive(Debug, Default)]
struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<MoviePage, SearchError>>>,
    calls: Arc<Mutex<Vec<(String, u32)>>>,
}

impl ScriptedProvider {
    fn new(outcomes: Vec<Result<MoviePage, SearchError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn call_log(&self) -> Arc<Mutex<Vec<(String, u32)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl MetadataProvider for ScriptedProvider {
    async fn popular_movies(&self, _page: u32) -> Result<MoviePage, SearchError> {
        Ok(MoviePage::default())
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, SearchError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(MoviePage::default()))
    }

    async fn movie_details(&self, _id: MovieId) -> Result<MovieDetails, SearchError> {
        Err(SearchError::RequestFailed {
            status: 404,
            status_text: "Not Found".to_string(),
        })
    }

    async fn movie_credits(&self, _id: MovieId) -> Result<Credits, SearchError> {
        Ok(Credits::default())
    }

    async fn movie_reviews(&self, _id: MovieId, _page: u32) -> Result<ReviewPage, SearchError> {
        Ok(ReviewPage::default())
    }
}

fn summary(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id: MovieId(id),
        title: title.to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        release_date: Some("2005-06-10".to_string()),
        vote_average: Some(7.7),
    }
}

fn page_of(results: Vec<MovieSummary>) -> MoviePage {
    MoviePage {
        page: 1,
        total_pages: 1,
        total_results: results.len() as u32,
        results,
    }
}

async fn settle() {
    // Let queued commands land, then cross the quiet interval
    for _ in 0..10 {
        yield_now().await;
    }
    advance(Duration::from_millis(600)).await;
    for _ in 0..10 {
        yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_complete_search_lifecycle() {
    let provider = ScriptedProvider::new(vec![Ok(page_of(vec![
        summary(272, "Batman Begins"),
        summary(155, "The Dark Knight"),
    ]))]);
    let calls = provider.call_log();
    let handle = spawn_search_dispatcher(SearchConfig::default(), provider);

    assert_ok!(handle.submit("batman").await);
    settle().await;

    let state = assert_ok!(handle.current_state().await);
    assert!(state.has_searched);
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.results[0].title, "Batman Begins");
    assert_eq!(calls.lock().unwrap().as_slice(), &[("batman".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn test_failure_never_leaves_partial_results() {
    let provider = ScriptedProvider::new(vec![
        Ok(page_of(vec![summary(272, "Batman Begins")])),
        Err(SearchError::RequestFailed {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }),
    ]);
    let handle = spawn_search_dispatcher(SearchConfig::default(), provider);

    assert_ok!(handle.submit("batman").await);
    settle().await;
    let state = assert_ok!(handle.current_state().await);
    assert_eq!(state.results.len(), 1);

    // Second search fails: previous results must not survive
    assert_ok!(handle.submit("batman returns").await);
    settle().await;

    let state = assert_ok!(handle.current_state().await);
    assert!(state.results.is_empty());
    assert!(!state.has_searched);
    assert!(!state.is_loading);
    assert_eq!(
        state.error.as_deref(),
        Some("API request failed: 500 Internal Server Error")
    );
}

#[tokio::test(start_paused = true)]
async fn test_queries_are_trimmed_before_dispatch() {
    let provider = ScriptedProvider::new(vec![Ok(page_of(vec![summary(272, "Batman Begins")]))]);
    let calls = provider.call_log();
    let handle = spawn_search_dispatcher(SearchConfig::default(), provider);

    assert_ok!(handle.submit("  batman  ").await);
    settle().await;

    assert_eq!(calls.lock().unwrap().as_slice(), &[("batman".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_rejects_further_commands() {
    let provider = ScriptedProvider::default();
    let handle = spawn_search_dispatcher(SearchConfig::default(), provider);

    assert!(handle.is_running());
    assert_ok!(handle.shutdown().await);
    for _ in 0..10 {
        yield_now().await;
    }

    assert!(!handle.is_running());
    let error = assert_err!(handle.submit("batman").await);
    assert!(matches!(error, SearchError::DispatcherShutdown));
    assert_err!(handle.current_state().await);
}

#[tokio::test(start_paused = true)]
async fn test_custom_quiet_interval_is_honored() {
    let provider = ScriptedProvider::new(vec![Ok(page_of(vec![summary(272, "Batman Begins")]))]);
    let calls = provider.call_log();
    let config = SearchConfig {
        quiet_interval: Duration::from_millis(50),
        ..SearchConfig::default()
    };
    let handle = spawn_search_dispatcher(config, provider);

    assert_ok!(handle.submit("batman").await);
    for _ in 0..10 {
        yield_now().await;
    }
    advance(Duration::from_millis(60)).await;

    let mut rx = handle.subscribe();
    let state = rx.wait_for(|state| state.has_searched).await.unwrap().clone();
    assert_eq!(state.results.len(), 1);
    assert_eq!(calls.lock().unwrap().len(), 1);
}
