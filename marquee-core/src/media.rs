//! Movie catalog data types and wire mappings.
//!
//! Mirrors the metadata service's JSON bodies. Collection fields default to
//! empty when absent so a partial response never fails deserialization.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Local asset served when a movie has no poster or profile image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-movie.svg";

/// Unique movie identifier assigned by the metadata service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Movie summary as returned by listing and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
}

impl MovieSummary {
    /// Release year parsed from the ISO release date, if present and valid.
    ///
    /// The service reports unreleased titles with an empty date string,
    /// which is treated as absent.
    pub fn release_year(&self) -> Option<i32> {
        parse_release_year(self.release_date.as_deref())
    }

    /// Poster URL for the requested size, or the placeholder when absent.
    pub fn poster_url(&self, image_base: &str, size: PosterSize) -> String {
        image_url(image_base, size, self.poster_path.as_deref())
    }
}

/// Detailed movie record returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: u32,
}

impl MovieDetails {
    /// Release year parsed from the ISO release date, if present and valid.
    pub fn release_year(&self) -> Option<i32> {
        parse_release_year(self.release_date.as_deref())
    }

    /// Poster URL for the requested size, or the placeholder when absent.
    pub fn poster_url(&self, image_base: &str, size: PosterSize) -> String {
        image_url(image_base, size, self.poster_path.as_deref())
    }

    /// Genre names joined for display, e.g. "Action, Thriller".
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|genre| genre.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

/// Genre classification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Cast member entry from the credits endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing order, lower is more prominent
    #[serde(default)]
    pub order: Option<u32>,
}

impl CastMember {
    /// Profile image URL for the requested size, or the placeholder when absent.
    pub fn profile_url(&self, image_base: &str, size: PosterSize) -> String {
        image_url(image_base, size, self.profile_path.as_deref())
    }
}

/// Single review from the reviews endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Content truncated to at most `max_chars` characters, with an
    /// ellipsis appended when truncation occurred.
    pub fn summary(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            return self.content.clone();
        }
        let truncated: String = self.content.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// One page of movie summaries from the listing or search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Credits body for a movie.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// One page of reviews for a movie.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Review>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Image size tokens supported by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    W200,
    W300,
    W500,
    Original,
}

impl PosterSize {
    /// Path segment used by the image CDN for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            PosterSize::W200 => "w200",
            PosterSize::W300 => "w300",
            PosterSize::W500 => "w500",
            PosterSize::Original => "original",
        }
    }
}

impl std::fmt::Display for PosterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves an image CDN URL for `path` at the requested size.
///
/// Absent or empty paths resolve to [`PLACEHOLDER_IMAGE`].
pub fn image_url(image_base: &str, size: PosterSize, path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => {
            format!("{}/{}{}", image_base.trim_end_matches('/'), size, path)
        }
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Formats a vote average for display with one decimal, `N/A` when absent.
pub fn format_rating(rating: Option<f32>) -> String {
    match rating {
        Some(value) if value.is_finite() => format!("{value:.1}"),
        _ => "N/A".to_string(),
    }
}

fn parse_release_year(raw: Option<&str>) -> Option<i32> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_movie_page_missing_results_defaults_empty() {
        let page: MoviePage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert_eq!(page.page, 1);
        assert!(page.results.is_empty());
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn test_movie_summary_wire_mapping() {
        let raw = r#"{
            "id": 272,
            "title": "Batman Begins",
            "poster_path": "/dr6x4GyyegBWtinPBzipY02J2lM.jpg",
            "release_date": "2005-06-10",
            "vote_average": 7.7
        }"#;
        let summary: MovieSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.id, MovieId(272));
        assert_eq!(summary.release_year(), Some(2005));
        assert_eq!(format_rating(summary.vote_average), "7.7");
    }

    #[test]
    fn test_release_year_empty_string_is_absent() {
        let summary = MovieSummary {
            id: MovieId(1),
            title: "Unreleased".to_string(),
            poster_path: None,
            release_date: Some("".to_string()),
            vote_average: None,
        };
        assert_eq!(summary.release_year(), None);
    }

    #[test]
    fn test_image_url_resolution() {
        let base = "https://image.tmdb.org/t/p";
        assert_eq!(
            image_url(base, PosterSize::W300, Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w300/abc.jpg"
        );
        assert_eq!(
            image_url(base, PosterSize::Original, Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert_eq!(image_url(base, PosterSize::W500, None), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(base, PosterSize::W200, Some("")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_format_rating_absent_is_na() {
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(f32::NAN)), "N/A");
        assert_eq!(format_rating(Some(8.25)), "8.2");
    }

    #[test]
    fn test_credits_missing_cast_defaults_empty() {
        let credits: Credits = serde_json::from_str("{}").unwrap();
        assert!(credits.cast.is_empty());
    }

    #[test]
    fn test_review_summary_truncation() {
        let review = Review {
            id: "r1".to_string(),
            author: "alice".to_string(),
            content: "x".repeat(600),
            created_at: None,
        };
        let summary = review.summary(500);
        assert_eq!(summary.chars().count(), 503);
        assert!(summary.ends_with("..."));

        let short = Review {
            content: "fine as is".to_string(),
            ..review
        };
        assert_eq!(short.summary(500), "fine as is");
    }

    proptest! {
        #[test]
        fn format_rating_never_panics(raw in any::<f32>()) {
            let formatted = format_rating(Some(raw));
            prop_assert!(!formatted.is_empty());
        }

        #[test]
        fn image_url_preserves_base_and_size(path in "/[a-zA-Z0-9]{1,16}\\.jpg") {
            let resolved = image_url("https://cdn.example/t/p", PosterSize::W200, Some(&path));
            prop_assert!(resolved.starts_with("https://cdn.example/t/p/w200/"));
            prop_assert!(resolved.ends_with(".jpg"));
        }
    }
}
