//! Mock provider implementation for testing.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use marquee_core::media::{Credits, MovieDetails, MovieId, MoviePage, MovieSummary, ReviewPage};

#[cfg(test)]
use super::MetadataProvider;
#[cfg(test)]
use crate::errors::SearchError;

/// Scripted provider for dispatcher and client tests.
///
/// Records every search call and serves either a fixed result list or a
/// scripted network failure. Detail lookups answer 404 so status-surface
/// tests have a deterministic failure to assert on.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    results: Vec<MovieSummary>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<(String, u32)>>>,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a provider answering every search with `results`.
    pub fn with_results(results: Vec<MovieSummary>) -> Self {
        Self {
            results,
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a provider failing every search with a network error.
    pub fn with_failure(reason: &str) -> Self {
        Self {
            results: Vec::new(),
            failure: Some(reason.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared call log, usable after the provider moves into an actor.
    pub fn call_log(&self) -> Arc<Mutex<Vec<(String, u32)>>> {
        Arc::clone(&self.calls)
    }

    fn page(&self) -> MoviePage {
        MoviePage {
            page: 1,
            results: self.results.clone(),
            total_pages: 1,
            total_results: self.results.len() as u32,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl MetadataProvider for MockProvider {
    async fn popular_movies(&self, _page: u32) -> Result<MoviePage, SearchError> {
        match self.failure {
            Some(ref reason) => Err(SearchError::Network {
                reason: reason.clone(),
            }),
            None => Ok(self.page()),
        }
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, SearchError> {
        self.calls.lock().unwrap().push((query.to_string(), page));

        match self.failure {
            Some(ref reason) => Err(SearchError::Network {
                reason: reason.clone(),
            }),
            None => Ok(self.page()),
        }
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
