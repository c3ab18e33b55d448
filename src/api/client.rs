//! Recommendation API client
//!
//! Thin wrapper over the four GET endpoints exposed by the recommendation
//! service: `/health`, `/recommend`, `/search` and `/stats`.
//!
//! One call is one request. There is no retry, timeout or cancellation;
//! overlapping calls resolve independently.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    ApiErrorBody, HealthResponse, MovieRecord, RecommendationResponse, SearchBy, SearchResponse,
    StatsResponse,
};

/// Default base URL of a locally running API
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Recommendation API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No movie found (404)")]
    NotFound,

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Recommendation API client
#[derive(Debug, Clone)]
pub struct RecommendClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for RecommendClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl RecommendClient {
    /// Create a client for the API at `base_url` (trailing `/` is ignored)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET and return the raw response
    async fn send(&self, endpoint: &str) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        tracing::debug!(%url, status = response.status().as_u16(), "response");
        Ok(response)
    }

    /// Parse a successful body as JSON
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    /// GET that treats every non-2xx status as a generic failure
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let response = self.send(endpoint).await?;
        let status = response.status();
        if !status.is_success() {
            log_error_body(endpoint, response).await;
            return Err(ApiError::Status(status.as_u16()));
        }
        Self::parse(response).await
    }

    /// Liveness probe; any 2xx means the API is available
    pub async fn health(&self) -> ApiResult<HealthResponse> {
        let response = self.send("/health").await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        // The body is informational only
        Ok(Self::parse(response).await.unwrap_or_default())
    }

    /// Movies similar to `title`, best match first.
    ///
    /// A 404 means the API knows no movie matching `title` and maps to
    /// [`ApiError::NotFound`]; every other failure is a generic error.
    pub async fn recommend(&self, title: &str, n: u32) -> ApiResult<RecommendationResponse> {
        let endpoint = format!("/recommend?movie={}&n={}", urlencoding::encode(title), n);

        let response = self.send(&endpoint).await?;
        match response.status() {
            status if status.is_success() => Self::parse(response).await,
            StatusCode::NOT_FOUND => {
                log_error_body(&endpoint, response).await;
                Err(ApiError::NotFound)
            }
            status => {
                log_error_body(&endpoint, response).await;
                Err(ApiError::Status(status.as_u16()))
            }
        }
    }

    /// Search movies by title or genre
    pub async fn search(&self, query: &str, by: SearchBy, limit: u32) -> ApiResult<SearchResponse> {
        let endpoint = match by {
            SearchBy::Title => format!("/search?q={}&limit={}", urlencoding::encode(query), limit),
            SearchBy::Genre => format!(
                "/search?q={}&by=genre&limit={}",
                urlencoding::encode(query),
                limit
            ),
        };
        self.get(&endpoint).await
    }

    /// Catalogue statistics
    pub async fn stats(&self) -> ApiResult<StatsResponse> {
        self.get("/stats").await
    }

    /// Look up the queried movie itself (first title match), for the
    /// header card above recommendations. Failures yield `None`.
    pub async fn movie_info(&self, title: &str) -> Option<MovieRecord> {
        match self.search(title, SearchBy::Title, 1).await {
            Ok(resp) => resp.results.into_iter().next(),
            Err(e) => {
                tracing::warn!(%title, error = %e, "movie info lookup failed");
                None
            }
        }
    }
}

/// Log the API's `{ "error": ... }` body, if it sent one
async fn log_error_body(endpoint: &str, response: reqwest::Response) {
    let status = response.status().as_u16();
    let Ok(text) = response.text().await else {
        return;
    };
    if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
        tracing::info!(
            %endpoint,
            status,
            error = %body.error,
            suggestion = body.suggested_search.as_deref().unwrap_or(""),
            "API returned an error"
        );
    }
}
