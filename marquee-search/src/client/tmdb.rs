//! Production metadata client speaking the TMDB v3 wire format.

use async_trait::async_trait;
use marquee_core::config::ApiConfig;
use marquee_core::media::{Credits, MovieDetails, MovieId, MoviePage, ReviewPage};
use serde::de::DeserializeOwned;

use super::MetadataProvider;
use crate::errors::SearchError;

/// HTTP client for the movie-metadata service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TmdbClient {
    /// Creates a new client from API configuration.
    ///
    /// # Errors
    /// - `SearchError::Network` - HTTP client could not be constructed
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|error| SearchError::Network {
                reason: format!("HTTP client construction failed: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Builds a full endpoint URL with the API key and query parameters.
    ///
    /// Parameter values must already be URL-encoded by the caller.
    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        let mut separator = '?';

        if let Some(ref api_key) = self.api_key {
            url.push(separator);
            url.push_str("api_key=");
            url.push_str(api_key);
            separator = '&';
        }

        for (name, value) in params {
            url.push(separator);
            url.push_str(name);
            url.push('=');
            url.push_str(value);
            separator = '&';
        }

        url
    }

    /// Issues a GET request and decodes the JSON body.
    async fn request<T: DeserializeOwned>(&self, url: &str) -> Result<T, SearchError> {
        tracing::debug!(%url, "Metadata request");

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|error| SearchError::Network {
                    reason: error.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::RequestFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|error| SearchError::Parse {
                reason: error.to_string(),
            })
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn popular_movies(&self, page: u32) -> Result<MoviePage, SearchError> {
        let url = self.endpoint("/movie/popular", &[("page", page.to_string())]);
        self.request(&url).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, SearchError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let url = self.endpoint(
            "/search/movie",
            &[
                ("query", urlencoding::encode(trimmed).into_owned()),
                ("page", page.to_string()),
            ],
        );
        self.request(&url).await
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails, SearchError> {
        let url = self.endpoint(&format!("/movie/{id}"), &[]);
        self.request(&url).await
    }

    async fn movie_credits(&self, id: MovieId) -> Result<Credits, SearchError> {
        let url = self.endpoint(&format!("/movie/{id}/credits"), &[]);
        self.request(&url).await
    }

    async fn movie_reviews(&self, id: MovieId, page: u32) -> Result<ReviewPage, SearchError> {
        let url = self.endpoint(
            &format!("/movie/{id}/reviews"),
            &[("page", page.to_string())],
        );
        self.request(&url).await
    }
}
