//! Favorites set with id-keyed membership and stable insertion order.

use serde::{Deserialize, Serialize};

use crate::media::{MovieId, MovieSummary};

/// Ordered set of favorite movies keyed by id.
///
/// Serializes as a plain list so the on-disk document stays readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<MovieSummary>,
}

impl Favorites {
    /// Creates an empty favorites set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the movie id is in the set.
    pub fn contains(&self, id: MovieId) -> bool {
        self.entries.iter().any(|movie| movie.id == id)
    }

    /// Adds the movie if absent, removes it if present.
    ///
    /// Returns true when the movie was added.
    pub fn toggle(&mut self, movie: MovieSummary) -> bool {
        if let Some(position) = self.entries.iter().position(|entry| entry.id == movie.id) {
            self.entries.remove(position);
            false
        } else {
            self.entries.push(movie);
            true
        }
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Favorites in insertion order.
    pub fn movies(&self) -> &[MovieSummary] {
        &self.entries
    }

    /// Iterates over favorites in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MovieSummary> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id: MovieId(id),
            title: title.to_string(),
            poster_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    #[test]
    fn test_toggle_pair_is_idempotent() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle(summary(1, "Dune")));
        assert!(favorites.contains(MovieId(1)));

        assert!(!favorites.toggle(summary(1, "Dune")));
        assert!(!favorites.contains(MovieId(1)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_membership_is_keyed_by_id() {
        let mut favorites = Favorites::new();
        favorites.toggle(summary(7, "Se7en"));

        // Same id, different summary payload still removes
        assert!(!favorites.toggle(summary(7, "Seven")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut favorites = Favorites::new();
        favorites.toggle(summary(3, "Alien"));
        favorites.toggle(summary(1, "Heat"));
        favorites.toggle(summary(2, "Ronin"));

        let titles: Vec<&str> = favorites.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Alien", "Heat", "Ronin"]);
    }
}
