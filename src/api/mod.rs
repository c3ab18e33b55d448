//! API client for the external recommendation service
//!
//! - Client: health, recommend, search, stats

pub mod client;

pub use client::{ApiError, ApiResult, RecommendClient, DEFAULT_API_URL};
