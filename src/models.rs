//! Data structures for the recommendation API
//!
//! Everything here is a transient JSON payload received from the API and
//! rendered immediately. Nothing is persisted.
//!
//! - **Movies**: search results and recommendations
//! - **Responses**: recommend / search / stats / health envelopes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{format_number, format_rating, format_similarity};

// =============================================================================
// Movie Models
// =============================================================================

/// A movie as returned by `/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub votes: u64,
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] - ⭐ {} ({} votes)",
            self.title,
            self.genre,
            format_rating(self.rating),
            format_number(self.votes)
        )
    }
}

/// A movie suggested as similar to the queried title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub votes: u64,
    /// Relevance in [0, 1]
    #[serde(default)]
    pub similarity_score: f64,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] - ⭐ {} - {} match",
            self.title,
            self.genre,
            format_rating(self.rating),
            format_similarity(self.similarity_score)
        )
    }
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// `/recommend` response; `recommendations` is ordered by relevance, best first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub query_movie: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_recommendations: Option<u32>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// How `/search` matches the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBy {
    /// Match against titles (the API default, `by` is omitted)
    #[default]
    Title,
    /// Match against genres (`by=genre`)
    Genre,
}

impl fmt::Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBy::Title => write!(f, "title"),
            SearchBy::Genre => write!(f, "genre"),
        }
    }
}

/// `/search` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_by: Option<SearchBy>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub results: Vec<MovieRecord>,
}

/// Min/max rating across the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

/// `/stats` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_movies: u64,
    pub avg_rating: f64,
    pub avg_votes: f64,
    pub rating_range: RatingRange,
}

/// `/health` response. Any 2xx counts as healthy, so every field is lenient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_movies: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_loaded: Option<bool>,
}

/// Error body the API attaches to non-2xx responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub suggested_search: Option<String>,
}
